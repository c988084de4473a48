use yew::prelude::*;

use super::{AgendaRow, BookmarkStoreHandle};
use crate::config::AgendaConfig;
use crate::types::UiSession;

#[derive(Properties, PartialEq)]
pub struct AgendaListProps {
    pub sessions: Vec<UiSession>,
    pub store: BookmarkStoreHandle,
    #[prop_or_default]
    pub config: AgendaConfig,
}

#[function_component(AgendaList)]
pub fn agenda_list(props: &AgendaListProps) -> Html {
    if props.sessions.is_empty() {
        return html! {
            <div style="flex:1; display:flex; align-items:center; justify-content:center; color:#888; font-size:1.2em;">
                { "No sessions scheduled" }
            </div>
        };
    }

    let mut sessions: Vec<&UiSession> = props.sessions.iter().collect();
    sessions.sort_by_key(|s| s.start_date);

    html! {
        <div class="agenda-list" style="display:flex; flex-direction:column;">
            { for sessions.into_iter().map(|session| html! {
                <AgendaRow
                    key={session.id.clone()}
                    session={session.clone()}
                    store={props.store.clone()}
                    config={props.config.clone()}
                />
            }) }
        </div>
    }
}
