use std::fmt;

use crate::error::{AgendaError, Result};

/// Opaque RGB color as used for icon tints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const LIGHT_GRAY: Color = Color::rgb(0xcc, 0xcc, 0xcc);
    pub const BOOKMARKED: Color = Color::rgb(0xf9, 0xa8, 0x25);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or `#rgb`. The leading `#` is optional.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.trim().trim_start_matches('#');
        let invalid = || AgendaError::InvalidColor(hex.to_string());

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        match digits.len() {
            6 => {
                let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
                Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
            }
            3 => {
                let channel = |i: usize| {
                    u8::from_str_radix(&digits[i..i + 1], 16)
                        .map(|v| v * 17)
                        .map_err(|_| invalid())
                };
                Ok(Self::rgb(channel(0)?, channel(1)?, channel(2)?))
            }
            _ => Err(invalid()),
        }
    }

    /// Linear interpolation between two colors, `t` clamped to `[0, 1]`.
    pub fn lerp(self, to: Color, t: f64) -> Color {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Color::rgb(mix(self.r, to.r), mix(self.g, to.g), mix(self.b, to.b))
    }

    pub fn to_css(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// The two tints a bookmark icon moves between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TintPalette {
    pub neutral: Color,
    pub bookmarked: Color,
}

impl TintPalette {
    pub fn tint_for(&self, bookmarked: bool) -> Color {
        if bookmarked {
            self.bookmarked
        } else {
            self.neutral
        }
    }
}

impl Default for TintPalette {
    fn default() -> Self {
        Self {
            neutral: Color::LIGHT_GRAY,
            bookmarked: Color::BOOKMARKED,
        }
    }
}

/// A time-based transition from one color to another.
///
/// Times are plain milliseconds from whatever clock the caller uses, so the
/// tween can be sampled from `js_sys::Date::now()` in the browser and from
/// fixed values in tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorTween {
    from: Color,
    to: Color,
    started_at_ms: f64,
    duration_ms: f64,
}

impl ColorTween {
    pub fn new(from: Color, to: Color, started_at_ms: f64, duration_ms: u32) -> Self {
        Self {
            from,
            to,
            started_at_ms,
            duration_ms: duration_ms as f64,
        }
    }

    /// A tween that already sits on its target.
    pub fn settled(color: Color) -> Self {
        Self::new(color, color, 0.0, 0)
    }

    pub fn target(&self) -> Color {
        self.to
    }

    /// Eased progress in `[0, 1]`.
    pub fn progress(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        let linear = ((now_ms - self.started_at_ms) / self.duration_ms).clamp(0.0, 1.0);
        // smoothstep
        linear * linear * (3.0 - 2.0 * linear)
    }

    pub fn sample(&self, now_ms: f64) -> Color {
        self.from.lerp(self.to, self.progress(now_ms))
    }

    pub fn is_finished(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }

    /// Start a new tween towards `to` from wherever this one currently is,
    /// so a retarget mid-flight does not jump.
    pub fn retarget(&self, to: Color, now_ms: f64, duration_ms: u32) -> Self {
        Self::new(self.sample(now_ms), to, now_ms, duration_ms)
    }
}

/// One scheduled run of a `TintAnimator`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationRun {
    generation: u64,
    tween: ColorTween,
}

/// Color sampled for one frame of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TintFrame {
    pub color: Color,
    pub finished: bool,
}

/// Owns the current tint transition and invalidates runs that were
/// superseded by a newer target or cancelled.
#[derive(Debug, Clone)]
pub struct TintAnimator {
    tween: ColorTween,
    generation: u64,
}

impl TintAnimator {
    pub fn new(color: Color) -> Self {
        Self {
            tween: ColorTween::settled(color),
            generation: 0,
        }
    }

    /// Head for `target`, continuing from the color shown at `now_ms`.
    ///
    /// Returns `None` when there is nothing to animate; any previous run is
    /// invalidated either way.
    pub fn retarget(&mut self, target: Color, now_ms: f64, duration_ms: u32) -> Option<AnimationRun> {
        self.tween = self.tween.retarget(target, now_ms, duration_ms);
        self.generation += 1;
        if self.tween.sample(now_ms) == target {
            self.tween = ColorTween::settled(target);
            return None;
        }
        Some(AnimationRun {
            generation: self.generation,
            tween: self.tween,
        })
    }

    /// Invalidate the running animation, if any.
    pub fn cancel(&mut self) {
        self.generation += 1;
    }

    /// Next frame for `run`, or `None` once the run is stale.
    pub fn frame(&self, run: &AnimationRun, now_ms: f64) -> Option<TintFrame> {
        if run.generation != self.generation {
            return None;
        }
        Some(TintFrame {
            color: run.tween.sample(now_ms),
            finished: run.tween.is_finished(now_ms),
        })
    }

    pub fn target(&self) -> Color {
        self.tween.target()
    }
}
