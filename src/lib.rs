pub mod agenda;
pub mod app;
pub mod bookmarks;
pub mod components;
pub mod config;
pub mod error;
pub mod format;
pub mod interop;
pub mod logging;
pub mod subtitle;
pub mod theme;
pub mod toggle;
pub mod types;

use wasm_bindgen::prelude::*;

pub use app::{App, AppProps};
pub use bookmarks::{BookmarkStore, BookmarkSubscription, InMemoryBookmarkStore};
pub use config::AgendaConfig;
pub use error::AgendaError;
pub use subtitle::{DefaultSubtitleFormatter, SubtitleFormatter};
pub use types::{Speaker, UiSession};

fn mount(root_id: &str, props: AppProps) -> error::Result<()> {
    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(root_id))
        .ok_or_else(|| AgendaError::MissingElement(root_id.to_string()))?;
    yew::Renderer::<App>::with_root_and_props(root, props).render();
    Ok(())
}

fn to_js(e: AgendaError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Mount the sample agenda on the element `root_id`.
#[wasm_bindgen]
pub fn mount_preview(root_id: &str) -> Result<(), JsValue> {
    let config = AgendaConfig::default();
    logging::init_console_logging(config.log_filter().map_err(to_js)?);

    let sessions = vec![types::sample_session().map_err(to_js)?];
    mount(
        root_id,
        AppProps {
            sessions,
            config,
            store: None,
        },
    )
    .map_err(to_js)
}

/// Preview build only: mount the sample agenda on `#root` at load time.
#[cfg(feature = "preview")]
#[wasm_bindgen(start)]
pub fn run_app() {
    if let Err(e) = mount_preview("root") {
        web_sys::console::error_1(&e);
    }
}

/// Mount an agenda built from host-supplied sessions on the element `root_id`.
///
/// `config_json` is an optional partial `AgendaConfig` document.
#[wasm_bindgen]
pub fn mount_agenda(
    root_id: &str,
    sessions: JsValue,
    config_json: Option<String>,
) -> Result<(), JsValue> {
    let config = match config_json {
        Some(json) => AgendaConfig::from_json(&json).map_err(to_js)?,
        None => AgendaConfig::default(),
    };
    logging::init_console_logging(config.log_filter().map_err(to_js)?);

    let sessions = interop::sessions_from_js(sessions).map_err(to_js)?;
    tracing::info!(sessions = sessions.len(), root_id, "mounting agenda");
    mount(
        root_id,
        AppProps {
            sessions,
            config,
            store: None,
        },
    )
    .map_err(to_js)
}
