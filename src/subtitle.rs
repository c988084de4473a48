use chrono::{DateTime, FixedOffset};

use crate::format::{
    DurationFormatter, FlagEmojiLookup, FormatContext, HumanDurationFormatter, LanguageEmojiLookup,
};
use crate::types::UiSession;

const SEPARATOR: &str = " / ";

/// Builds the `duration / room / flag` line shown under a session title.
#[derive(Debug, Clone, Default)]
pub struct SubtitleFormatter<D, E> {
    durations: D,
    emojis: E,
}

pub type DefaultSubtitleFormatter = SubtitleFormatter<HumanDurationFormatter, FlagEmojiLookup>;

impl<D: DurationFormatter, E: LanguageEmojiLookup> SubtitleFormatter<D, E> {
    pub fn new(durations: D, emojis: E) -> Self {
        Self { durations, emojis }
    }

    pub fn format(
        &self,
        context: &FormatContext,
        start: &DateTime<FixedOffset>,
        end: &DateTime<FixedOffset>,
        room: &str,
        language: Option<&str>,
    ) -> String {
        let millis = end.timestamp_millis() - start.timestamp_millis();
        self.compose(context, millis, room, language)
    }

    pub fn subtitle(&self, context: &FormatContext, session: &UiSession) -> String {
        self.compose(
            context,
            session.duration_millis(),
            &session.room,
            session.language.as_deref(),
        )
    }

    fn compose(&self, context: &FormatContext, millis: i64, room: &str, language: Option<&str>) -> String {
        let millis = if millis < 0 {
            tracing::warn!(millis, room, "session ends before it starts, showing zero duration");
            0
        } else {
            millis
        };

        let mut subtitle = self.durations.format(context, millis);
        subtitle.push_str(SEPARATOR);
        subtitle.push_str(room);

        if let Some(emoji) = language
            .and_then(|code| self.emojis.lookup(code))
            .filter(|glyph| !glyph.is_empty())
        {
            subtitle.push_str(SEPARATOR);
            subtitle.push_str(&emoji);
        }
        subtitle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::Locale;
    use crate::logging::capture_logs;
    use crate::types::sample_session;

    /// Always answers with the same text.
    struct FixedDuration(&'static str);

    impl DurationFormatter for FixedDuration {
        fn format(&self, _context: &FormatContext, _millis: i64) -> String {
            self.0.to_string()
        }
    }

    /// Echoes the millis it was given.
    struct MillisDuration;

    impl DurationFormatter for MillisDuration {
        fn format(&self, _context: &FormatContext, millis: i64) -> String {
            format!("{}ms", millis)
        }
    }

    struct FrenchOnly;

    impl LanguageEmojiLookup for FrenchOnly {
        fn lookup(&self, language: &str) -> Option<String> {
            (language == "french").then(|| "🇫🇷".to_string())
        }
    }

    struct EmptyGlyph;

    impl LanguageEmojiLookup for EmptyGlyph {
        fn lookup(&self, _language: &str) -> Option<String> {
            Some(String::new())
        }
    }

    fn time(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    #[test]
    fn test_subtitle_with_known_language() {
        let formatter = SubtitleFormatter::new(FixedDuration("1h"), FrenchOnly);
        let subtitle = formatter.format(
            &FormatContext::default(),
            &time("2022-04-25T09:00:00+02:00"),
            &time("2022-04-25T10:00:00+02:00"),
            "Moebius",
            Some("french"),
        );
        assert_eq!(subtitle, "1h / Moebius / 🇫🇷");
    }

    #[test]
    fn test_subtitle_with_unknown_language() {
        let formatter = SubtitleFormatter::new(FixedDuration("1h"), FrenchOnly);
        let subtitle = formatter.format(
            &FormatContext::default(),
            &time("2022-04-25T09:00:00+02:00"),
            &time("2022-04-25T10:00:00+02:00"),
            "Moebius",
            Some("klingon"),
        );
        assert_eq!(subtitle, "1h / Moebius");
        assert_eq!(subtitle.matches(" / ").count(), 1);
    }

    #[test]
    fn test_subtitle_without_language() {
        let formatter = SubtitleFormatter::new(FixedDuration("1h"), FrenchOnly);
        let mut session = sample_session().unwrap();
        session.language = None;
        assert_eq!(formatter.subtitle(&FormatContext::default(), &session), "1h / Moebius");
    }

    #[test]
    fn test_empty_glyph_is_not_appended() {
        let formatter = SubtitleFormatter::new(FixedDuration("1h"), EmptyGlyph);
        let session = sample_session().unwrap();
        assert_eq!(formatter.subtitle(&FormatContext::default(), &session), "1h / Moebius");
    }

    #[test]
    fn test_subtitle_starts_with_formatted_duration() {
        let formatter = SubtitleFormatter::new(MillisDuration, FrenchOnly);
        let subtitle = formatter.format(
            &FormatContext::default(),
            &time("2022-04-25T09:00:00+02:00"),
            &time("2022-04-25T09:00:01+02:00"),
            "Blin",
            Some("french"),
        );
        assert!(subtitle.starts_with("1000ms"));
        assert_eq!(subtitle, "1000ms / Blin / 🇫🇷");
    }

    #[test]
    fn test_offsets_do_not_change_duration() {
        let formatter = SubtitleFormatter::new(MillisDuration, FrenchOnly);
        let subtitle = formatter.format(
            &FormatContext::default(),
            &time("2022-04-25T09:00:00+02:00"),
            &time("2022-04-25T08:00:00+00:00"),
            "Moebius",
            None,
        );
        assert_eq!(subtitle, "3600000ms / Moebius");
    }

    #[test]
    fn test_empty_room_still_separated() {
        let formatter = SubtitleFormatter::new(FixedDuration("1h"), FrenchOnly);
        let subtitle = formatter.format(
            &FormatContext::default(),
            &time("2022-04-25T09:00:00+02:00"),
            &time("2022-04-25T10:00:00+02:00"),
            "",
            None,
        );
        assert_eq!(subtitle, "1h / ");
    }

    #[test]
    fn test_zero_duration_goes_through_formatter() {
        let formatter = SubtitleFormatter::new(MillisDuration, FrenchOnly);
        let at = time("2022-04-25T09:00:00+02:00");
        assert_eq!(
            formatter.format(&FormatContext::default(), &at, &at, "Moebius", None),
            "0ms / Moebius"
        );
    }

    #[test]
    fn test_inverted_range_is_clamped() {
        let formatter = SubtitleFormatter::new(MillisDuration, FrenchOnly);
        let subtitle = formatter.format(
            &FormatContext::default(),
            &time("2022-04-25T10:00:00+02:00"),
            &time("2022-04-25T09:00:00+02:00"),
            "Moebius",
            None,
        );
        assert_eq!(subtitle, "0ms / Moebius");
    }

    #[test]
    fn test_inverted_range_logs_warning() {
        let formatter = SubtitleFormatter::new(MillisDuration, FrenchOnly);
        let mut session = sample_session().unwrap();
        std::mem::swap(&mut session.start_date, &mut session.end_date);

        let mut subtitle = String::new();
        let logs = capture_logs(|| subtitle = formatter.subtitle(&FormatContext::default(), &session));

        assert_eq!(subtitle, "0ms / Moebius / 🇫🇷");
        assert!(logs.contains("WARN"));
        assert!(logs.contains("session ends before it starts"));
        assert!(logs.contains("-3600000"));
    }

    #[test]
    fn test_valid_range_logs_nothing() {
        let formatter = SubtitleFormatter::new(MillisDuration, FrenchOnly);
        let session = sample_session().unwrap();
        let logs = capture_logs(|| {
            formatter.subtitle(&FormatContext::default(), &session);
        });
        assert!(logs.is_empty());
    }

    #[test]
    fn test_formatting_is_idempotent() {
        let formatter = DefaultSubtitleFormatter::default();
        let ctx = FormatContext::new(Locale::Fr);
        let session = sample_session().unwrap();
        let first = formatter.subtitle(&ctx, &session);
        let second = formatter.subtitle(&ctx, &session);
        assert_eq!(first, second);
        assert_eq!(first, "1h / Moebius / 🇫🇷");
    }
}
