use wasm_bindgen::JsValue;

use crate::error::{AgendaError, Result};
use crate::types::UiSession;

/// Decode sessions handed over by the host page as a JS array.
pub fn sessions_from_js(value: JsValue) -> Result<Vec<UiSession>> {
    let sessions: Vec<UiSession> = serde_wasm_bindgen::from_value(value)
        .map_err(|e| AgendaError::InvalidSessions(e.to_string()))?;
    Ok(sort_by_start(sessions))
}

fn sort_by_start(mut sessions: Vec<UiSession>) -> Vec<UiSession> {
    sessions.sort_by(|a, b| a.start_date.cmp(&b.start_date).then_with(|| a.room_id.cmp(&b.room_id)));
    sessions
}
