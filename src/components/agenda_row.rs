use yew::prelude::*;

use super::{BookmarkButton, BookmarkStoreHandle};
use crate::config::AgendaConfig;
use crate::subtitle::DefaultSubtitleFormatter;
use crate::types::UiSession;

#[derive(Properties, PartialEq)]
pub struct AgendaRowProps {
    pub session: UiSession,
    pub store: BookmarkStoreHandle,
    #[prop_or_default]
    pub config: AgendaConfig,
}

/// One agenda entry: title, speakers, subtitle and a bookmark toggle.
#[function_component(AgendaRow)]
pub fn agenda_row(props: &AgendaRowProps) -> Html {
    let session = &props.session;
    let config = &props.config;

    let subtitle = DefaultSubtitleFormatter::default().subtitle(&config.format_context(), session);
    let palette = config.palette_or_default();

    html! {
        <div class="agenda-row" style="display:flex; align-items:center; gap:1em; padding:0.75em 1em; border-bottom:1px solid #eee; font-family:Arial,sans-serif;">
            <div style="flex:1; display:flex; flex-direction:column; min-width:0;">
                <div style="font-size:1.05em; font-weight:bold; color:#222;">
                    { &session.title }
                </div>
                { if let Some(speakers) = session.speakers_line() {
                    html! {
                        <div style="font-size:0.85em; color:#555; margin-top:0.25em;">
                            { speakers }
                        </div>
                    }
                } else {
                    html! {}
                }}
                <div style="font-size:0.85em; color:#555; margin-top:4px;">
                    { subtitle }
                </div>
            </div>
            <div>
                <BookmarkButton
                    key={session.id.clone()}
                    session_id={session.id.clone()}
                    store={props.store.clone()}
                    {palette}
                    animation_ms={config.tint_animation_ms}
                />
            </div>
        </div>
    }
}
