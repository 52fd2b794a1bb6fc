//! Tooltip placement with flip-on-overflow.

#[cfg(test)]
#[path = "tooltip_test.rs"]
mod tooltip_test;

use crate::util::geometry::{Point, Rect, Size, clamp_span};

pub const DEFAULT_OPEN_DELAY_MS: u32 = 300;
pub const DEFAULT_GAP_PX: f64 = 8.0;
const EDGE_MARGIN_PX: f64 = 4.0;

/// Side of the anchor the tooltip sits on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Placement {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
}

impl Placement {
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    #[must_use]
    pub fn modifier(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// Choose a side and top-left corner for a tooltip of `tip` size.
///
/// The preferred side wins when it fits, otherwise the opposite side when
/// that fits, otherwise the preferred side anyway. The cross axis is centred
/// on the anchor and clamped into the viewport.
#[must_use]
pub fn place_tooltip(anchor: Rect, tip: Size, viewport: Rect, preferred: Placement, gap: f64) -> (Placement, Point) {
    let placement = if fits(anchor, tip, viewport, preferred, gap) {
        preferred
    } else if fits(anchor, tip, viewport, preferred.opposite(), gap) {
        preferred.opposite()
    } else {
        preferred
    };

    let center = anchor.center();
    let point = match placement {
        Placement::Top | Placement::Bottom => {
            let y = if placement == Placement::Top { anchor.y - gap - tip.height } else { anchor.bottom() + gap };
            let x = clamp_span(center.x - tip.width / 2.0, tip.width, viewport.x, viewport.right(), EDGE_MARGIN_PX);
            Point::new(x, y)
        }
        Placement::Left | Placement::Right => {
            let x = if placement == Placement::Left { anchor.x - gap - tip.width } else { anchor.right() + gap };
            let y = clamp_span(center.y - tip.height / 2.0, tip.height, viewport.y, viewport.bottom(), EDGE_MARGIN_PX);
            Point::new(x, y)
        }
    };
    (placement, point)
}

fn fits(anchor: Rect, tip: Size, viewport: Rect, placement: Placement, gap: f64) -> bool {
    match placement {
        Placement::Top => anchor.y - gap - tip.height >= viewport.y,
        Placement::Bottom => anchor.bottom() + gap + tip.height <= viewport.bottom(),
        Placement::Left => anchor.x - gap - tip.width >= viewport.x,
        Placement::Right => anchor.right() + gap + tip.width <= viewport.right(),
    }
}
