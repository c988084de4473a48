use yew::prelude::*;

use crate::bookmarks::InMemoryBookmarkStore;
use crate::components::{AgendaList, AgendaRow, AgendaView, BookmarkStoreHandle};
use crate::config::AgendaConfig;
use crate::types::UiSession;

#[derive(Clone, Copy, PartialEq)]
pub enum ViewMode {
    List,
    Timeline,
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub sessions: Vec<UiSession>,
    #[prop_or_default]
    pub config: AgendaConfig,
    /// Store to bind bookmarks to; when absent, an in-memory store seeded
    /// with `config.bookmarks` is used.
    #[prop_or_default]
    pub store: Option<BookmarkStoreHandle>,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let store = {
        let injected = props.store.clone();
        let initial = props.config.bookmarks.clone();
        use_memo(injected, move |injected| {
            injected
                .clone()
                .unwrap_or_else(|| BookmarkStoreHandle::new(InMemoryBookmarkStore::with_bookmarks(initial)))
        })
    };
    let view_mode = use_state(|| ViewMode::List);
    let selected_session = use_state(|| None::<UiSession>);

    let on_show_list = {
        let view_mode = view_mode.clone();
        Callback::from(move |_: MouseEvent| view_mode.set(ViewMode::List))
    };

    let on_show_timeline = {
        let view_mode = view_mode.clone();
        Callback::from(move |_: MouseEvent| view_mode.set(ViewMode::Timeline))
    };

    let on_select = {
        let selected_session = selected_session.clone();
        Callback::from(move |session: UiSession| selected_session.set(Some(session)))
    };

    let on_modal_close = {
        let selected_session = selected_session.clone();
        Callback::from(move |_: MouseEvent| selected_session.set(None))
    };

    let tab_style = |active: bool| {
        format!(
            "flex:1; padding:0.6em 0; font-size:1em; border:1px solid #ccc; border-radius:4px; cursor:pointer; {}",
            if active { "background:#007bff; color:white;" } else { "background:white; color:#333;" }
        )
    };

    html! {
        <div style="display:flex; flex-direction:column; height:100vh; font-family:Arial,sans-serif;">
            <div style="padding:1em 1.5em; background:#f8f9fa; border-bottom:1px solid #ddd; display:flex; align-items:center; gap:1em;">
                <h1 style="margin:0; font-size:1.3em; color:#333; flex:1;">
                    { format!("Agenda ({} session{})", props.sessions.len(), if props.sessions.len() != 1 { "s" } else { "" }) }
                </h1>
                <div style="display:flex; gap:0.5em; width:240px;">
                    <button onclick={on_show_list} style={tab_style(*view_mode == ViewMode::List)}>{ "List" }</button>
                    <button onclick={on_show_timeline} style={tab_style(*view_mode == ViewMode::Timeline)}>{ "Timeline" }</button>
                </div>
            </div>
            <div style="flex:1; overflow-y:auto; padding:1em;">
                { match *view_mode {
                    ViewMode::List => html! {
                        <AgendaList
                            sessions={props.sessions.clone()}
                            store={(*store).clone()}
                            config={props.config.clone()}
                        />
                    },
                    ViewMode::Timeline => html! {
                        <AgendaView
                            sessions={props.sessions.clone()}
                            config={props.config.clone()}
                            {on_select}
                        />
                    },
                }}
            </div>

            { if let Some(ref session) = *selected_session {
                html! {
                    <div
                        style="position:fixed; top:0; left:0; width:100%; height:100%; background:rgba(0,0,0,0.5); display:flex; align-items:center; justify-content:center; z-index:1000;"
                        onclick={on_modal_close.clone()}
                    >
                        <div
                            style="background:white; border-radius:8px; min-width:360px; max-width:90%; overflow:hidden;"
                            onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
                        >
                            <AgendaRow
                                session={session.clone()}
                                store={(*store).clone()}
                                config={props.config.clone()}
                            />
                            <div style="padding:0.75em 1em; text-align:right;">
                                <button onclick={on_modal_close.clone()} style="padding:0.4em 1em; cursor:pointer;">{ "Close" }</button>
                            </div>
                        </div>
                    </div>
                }
            } else {
                html! {}
            }}
        </div>
    }
}
