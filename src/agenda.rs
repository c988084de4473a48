use std::collections::BTreeMap;

use chrono::{DateTime, Duration, FixedOffset, Timelike};

use crate::types::UiSession;

pub const HOUR_MS: i64 = 3_600_000;
pub const DAY_MS: i64 = 24 * HOUR_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockStyle {
    Blue,
    Red,
    Green,
}

impl BlockStyle {
    const ALL: [BlockStyle; 3] = [BlockStyle::Blue, BlockStyle::Red, BlockStyle::Green];

    pub fn for_index(index: i64) -> Self {
        Self::ALL[(index.unsigned_abs() % Self::ALL.len() as u64) as usize]
    }

    pub fn background(&self) -> &'static str {
        match self {
            BlockStyle::Blue => "#1e88e5",
            BlockStyle::Red => "#e53935",
            BlockStyle::Green => "#43a047",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AgendaBlock {
    pub session: UiSession,
    pub top_px: u32,
    pub height_px: u32,
    pub style: BlockStyle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AgendaTrack {
    pub room_id: String,
    pub room: String,
    pub blocks: Vec<AgendaBlock>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HourLine {
    pub y_px: u32,
    pub label: String,
}

/// Vertical timeline: one column per room, one line per hour.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AgendaLayout {
    pub first_hour: Option<DateTime<FixedOffset>>,
    pub tracks: Vec<AgendaTrack>,
    pub hour_lines: Vec<HourLine>,
    pub height_px: u32,
}

impl AgendaLayout {
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Lay out `sessions` at `pixels_per_hour`.
    ///
    /// Returns an empty layout for an empty input, and for a schedule that
    /// spans more than a day, which only happens with bad data.
    pub fn compute(sessions: &[UiSession], pixels_per_hour: f64) -> Self {
        let Some(earliest) = sessions.iter().min_by_key(|s| s.start_date) else {
            return Self::default();
        };
        let start = earliest.start_date;
        let end = sessions
            .iter()
            .map(|s| s.end_date)
            .max()
            .unwrap_or(start);

        let span_ms = (end - start).num_milliseconds();
        if span_ms > DAY_MS {
            tracing::warn!(span_ms, "agenda spans more than a day, skipping layout");
            return Self::default();
        }

        let first_hour = closest_hour(start - Duration::hours(1));
        let to_px = |at: DateTime<FixedOffset>| px_from_ms((at - first_hour).num_milliseconds(), pixels_per_hour);

        let mut by_room: BTreeMap<(i64, String), Vec<&UiSession>> = BTreeMap::new();
        for session in sessions {
            let key = session.room_id.parse::<i64>().unwrap_or(i64::MAX);
            by_room
                .entry((key, session.room_id.clone()))
                .or_default()
                .push(session);
        }

        let tracks = by_room
            .into_iter()
            .enumerate()
            .map(|(position, ((room_key, room_id), mut room_sessions))| {
                room_sessions.sort_by_key(|s| s.start_date);
                let style_index = if room_key == i64::MAX { position as i64 } else { room_key };
                let style = BlockStyle::for_index(style_index);
                let room = room_sessions
                    .first()
                    .map(|s| s.room.clone())
                    .unwrap_or_default();
                let blocks = room_sessions
                    .into_iter()
                    .map(|session| {
                        let top_px = to_px(session.start_date);
                        AgendaBlock {
                            session: session.clone(),
                            top_px,
                            height_px: to_px(session.end_date).saturating_sub(top_px),
                            style,
                        }
                    })
                    .collect();
                AgendaTrack { room_id, room, blocks }
            })
            .collect();

        let mut hour_lines = Vec::new();
        let mut timestamp = first_hour + Duration::hours(1);
        while timestamp <= end {
            hour_lines.push(HourLine {
                y_px: to_px(timestamp),
                label: time_label(&timestamp),
            });
            timestamp += Duration::hours(1);
        }

        Self {
            first_hour: Some(first_hour),
            tracks,
            hour_lines,
            height_px: to_px(end),
        }
    }
}

/// The next full hour after `at`, in `at`'s own offset.
fn closest_hour(at: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
    let next = at + Duration::hours(1);
    next.with_minute(0)
        .and_then(|t| t.with_second(0))
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(next)
}

fn px_from_ms(ms: i64, pixels_per_hour: f64) -> u32 {
    let px = (pixels_per_hour * ms as f64 / HOUR_MS as f64).round();
    if px <= 0.0 {
        0
    } else {
        px as u32
    }
}

pub fn time_label(at: &DateTime<FixedOffset>) -> String {
    format!("{:02}:00", at.hour())
}
