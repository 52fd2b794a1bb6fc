//! Pointer-driven 3D tilt for cards.

#[cfg(test)]
#[path = "tilt_math_test.rs"]
mod tilt_math_test;

use crate::util::geometry::{Point, Rect};

pub const DEFAULT_MAX_TILT_DEG: f64 = 10.0;
pub const DEFAULT_PERSPECTIVE_PX: f64 = 800.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tilt {
    /// Rotation about the X axis; positive tips the top edge away.
    pub rotate_x: f64,
    pub rotate_y: f64,
    /// Glare highlight position in percent of the card.
    pub glare_x: f64,
    pub glare_y: f64,
}

impl Tilt {
    /// Resting pose with the glare centred.
    #[must_use]
    pub fn rest() -> Self {
        Self { rotate_x: 0.0, rotate_y: 0.0, glare_x: 50.0, glare_y: 50.0 }
    }

    #[must_use]
    pub fn transform(&self, perspective_px: f64) -> String {
        format!(
            "perspective({perspective_px}px) rotateX({:.2}deg) rotateY({:.2}deg)",
            self.rotate_x, self.rotate_y
        )
    }

    #[must_use]
    pub fn glare_style(&self) -> String {
        format!("--glare-x: {:.1}%; --glare-y: {:.1}%", self.glare_x, self.glare_y)
    }
}

/// Tilt for a pointer at `pointer` over a card at `rect`.
///
/// The centre is flat, edges reach `±max_deg`, and pointers outside the card
/// clamp to the nearest edge.
#[must_use]
pub fn tilt_angles(pointer: Point, rect: Rect, max_deg: f64) -> Tilt {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return Tilt::rest();
    }
    let nx = ((pointer.x - rect.x) / rect.width).clamp(0.0, 1.0);
    let ny = ((pointer.y - rect.y) / rect.height).clamp(0.0, 1.0);
    // Map [0, 1] to [-1, 1] around the centre.
    let dx = nx * 2.0 - 1.0;
    let dy = ny * 2.0 - 1.0;
    Tilt { rotate_x: -dy * max_deg, rotate_y: dx * max_deg, glare_x: nx * 100.0, glare_y: ny * 100.0 }
}
