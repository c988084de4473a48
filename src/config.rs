use serde::{Deserialize, Serialize};
use tracing_subscriber::filter::LevelFilter;

use crate::error::{AgendaError, Result};
use crate::format::{FormatContext, Locale};
use crate::theme::{Color, TintPalette};

pub const DEFAULT_TINT_ANIMATION_MS: u32 = 300;

/// Display settings for agenda rows and the timeline.
///
/// Every field has a default, so a host page only needs to send the keys it
/// wants to change. Keys are camelCase like the session documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AgendaConfig {
    pub locale: Locale,
    pub neutral_tint: String,
    pub bookmarked_tint: String,
    pub tint_animation_ms: u32,
    pub pixels_per_hour: f64,
    pub time_column_width: u32,
    /// Console log level: `off`, `error`, `warn`, `info`, `debug` or `trace`.
    pub log_level: String,
    /// Session ids that start out bookmarked.
    pub bookmarks: Vec<String>,
}

impl Default for AgendaConfig {
    fn default() -> Self {
        Self {
            locale: Locale::En,
            neutral_tint: Color::LIGHT_GRAY.to_css(),
            bookmarked_tint: Color::BOOKMARKED.to_css(),
            tint_animation_ms: DEFAULT_TINT_ANIMATION_MS,
            pixels_per_hour: 150.0,
            time_column_width: 50,
            log_level: "info".to_string(),
            bookmarks: Vec::new(),
        }
    }
}

impl AgendaConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        // Reject bad values up front rather than at first render
        config.palette()?;
        config.log_filter()?;
        Ok(config)
    }

    pub fn palette(&self) -> Result<TintPalette> {
        Ok(TintPalette {
            neutral: Color::from_hex(&self.neutral_tint)?,
            bookmarked: Color::from_hex(&self.bookmarked_tint)?,
        })
    }

    /// Like `palette`, but falls back to the default tints with a warning.
    pub fn palette_or_default(&self) -> TintPalette {
        self.palette().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "falling back to default bookmark tints");
            TintPalette::default()
        })
    }

    pub fn log_filter(&self) -> Result<LevelFilter> {
        self.log_level
            .trim()
            .parse::<LevelFilter>()
            .map_err(|_| AgendaError::InvalidLogLevel(self.log_level.clone()))
    }

    pub fn format_context(&self) -> FormatContext {
        FormatContext::new(self.locale)
    }
}
