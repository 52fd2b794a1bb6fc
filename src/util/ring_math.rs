//! SVG geometry for circular progress rings.

#[cfg(test)]
#[path = "ring_math_test.rs"]
mod ring_math_test;

use std::f64::consts::TAU;

pub const DEFAULT_RING_SIZE: f64 = 48.0;
pub const DEFAULT_RING_STROKE: f64 = 4.0;
/// Default bounds: below the first is danger, below the second is warning.
pub const DEFAULT_TONE_THRESHOLDS: (f64, f64) = (33.0, 66.0);
/// Visible arc fraction of an indeterminate spinner.
pub const INDETERMINATE_ARC_PERCENT: f64 = 25.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingGeometry {
    /// Circle radius inside the stroke.
    pub radius: f64,
    pub circumference: f64,
    /// `stroke-dashoffset` that leaves `percent` of the arc drawn.
    pub dash_offset: f64,
    /// Clamped percent actually drawn.
    pub percent: f64,
}

/// Clamp a percentage into `[0, 100]`, mapping NaN to 0.
#[must_use]
pub fn clamp_percent(percent: f64) -> f64 {
    if percent.is_nan() { 0.0 } else { percent.clamp(0.0, 100.0) }
}

#[must_use]
pub fn ring_geometry(size: f64, stroke: f64, percent: f64) -> RingGeometry {
    let percent = clamp_percent(percent);
    let radius = ((size - stroke) / 2.0).max(0.0);
    let circumference = TAU * radius;
    let dash_offset = circumference * (1.0 - percent / 100.0);
    RingGeometry { radius, circumference, dash_offset, percent }
}

/// Color band of a ring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Danger,
    Warning,
    Success,
}

impl Tone {
    #[must_use]
    pub fn modifier(self) -> &'static str {
        match self {
            Self::Danger => "danger",
            Self::Warning => "warning",
            Self::Success => "success",
        }
    }
}

#[must_use]
pub fn tone_for_percent(percent: f64, thresholds: (f64, f64)) -> Tone {
    let percent = clamp_percent(percent);
    if percent < thresholds.0 {
        Tone::Danger
    } else if percent < thresholds.1 {
        Tone::Warning
    } else {
        Tone::Success
    }
}

/// Centre label, rounded to whole percent.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn percent_label(percent: f64) -> String {
    format!("{}%", clamp_percent(percent).round() as i64)
}
