use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::error::{AgendaError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Speaker {
    pub name: String,
}

impl Speaker {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Read-only view model for one agenda entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiSession {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub speakers: Vec<Speaker>,
    pub room_id: String,
    pub room: String,
    pub start_date: DateTime<FixedOffset>,
    pub end_date: DateTime<FixedOffset>,
}

impl UiSession {
    /// Build a session, rejecting one whose end precedes its start.
    ///
    /// Sessions decoded from host data skip this check; their durations are
    /// clamped when displayed instead.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        room_id: impl Into<String>,
        room: impl Into<String>,
        start_date: DateTime<FixedOffset>,
        end_date: DateTime<FixedOffset>,
    ) -> Result<Self> {
        let id = id.into();
        if end_date < start_date {
            return Err(AgendaError::InvalidTimeRange { id });
        }
        Ok(Self {
            id,
            title: title.into(),
            language: None,
            speakers: Vec::new(),
            room_id: room_id.into(),
            room: room.into(),
            start_date,
            end_date,
        })
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_speakers(mut self, speakers: Vec<Speaker>) -> Self {
        self.speakers = speakers;
        self
    }

    /// Signed length in milliseconds; negative for malformed data.
    pub fn duration_millis(&self) -> i64 {
        self.end_date.timestamp_millis() - self.start_date.timestamp_millis()
    }

    /// Speaker names joined with `", "`, or `None` when there is nothing to show.
    pub fn speakers_line(&self) -> Option<String> {
        let line = self
            .speakers
            .iter()
            .map(|s| s.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        if line.trim().is_empty() {
            None
        } else {
            Some(line)
        }
    }
}

/// Session shown by the preview page.
pub fn sample_session() -> Result<UiSession> {
    let session = UiSession::new(
        "1",
        "Why did the chicken cross the road?",
        "1",
        "Moebius",
        DateTime::parse_from_rfc3339("2022-04-25T09:00:00+02:00")?,
        DateTime::parse_from_rfc3339("2022-04-25T10:00:00+02:00")?,
    )?;
    Ok(session
        .with_language("french")
        .with_speakers(vec![Speaker::new("chicken1")]))
}
