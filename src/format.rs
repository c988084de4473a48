use serde::{Deserialize, Serialize};

const MILLIS_PER_MINUTE: i64 = 60_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Fr,
}

/// Rendering context handed to duration formatters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormatContext {
    pub locale: Locale,
}

impl FormatContext {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }
}

pub trait DurationFormatter {
    /// Format an elapsed time. `millis` is never negative when called from
    /// the subtitle formatter.
    fn format(&self, context: &FormatContext, millis: i64) -> String;
}

pub trait LanguageEmojiLookup {
    /// Glyph for a language code, or `None` when the code is unknown.
    fn lookup(&self, language: &str) -> Option<String>;
}

/// Short human durations: `45 min`, `1h`, `1h 30min` (English) or `1h30` (French).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HumanDurationFormatter;

impl DurationFormatter for HumanDurationFormatter {
    fn format(&self, context: &FormatContext, millis: i64) -> String {
        let total_minutes = millis.max(0) / MILLIS_PER_MINUTE;
        let hours = total_minutes / 60;
        let minutes = total_minutes % 60;

        if hours == 0 {
            return format!("{} min", minutes);
        }
        if minutes == 0 {
            return format!("{}h", hours);
        }
        match context.locale {
            Locale::En => format!("{}h {}min", hours, minutes),
            Locale::Fr => format!("{}h{:02}", hours, minutes),
        }
    }
}

/// Flag emoji for the languages talks are given in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlagEmojiLookup;

impl LanguageEmojiLookup for FlagEmojiLookup {
    fn lookup(&self, language: &str) -> Option<String> {
        let glyph = match language.trim().to_lowercase().as_str() {
            "french" | "fr" => "🇫🇷",
            "english" | "en" => "🇬🇧",
            _ => return None,
        };
        Some(glyph.to_string())
    }
}
