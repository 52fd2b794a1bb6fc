//! Plain screen-space geometry shared by overlay and effect widgets.
//!
//! Everything here is in CSS pixels with the origin at the viewport's
//! top-left corner, matching `getBoundingClientRect`.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Rectangle at the origin with the given size (a viewport).
    #[must_use]
    pub const fn from_size(size: Size) -> Self {
        Self { x: 0.0, y: 0.0, width: size.width, height: size.height }
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }
}

/// Clamp `start` so that a span of `len` stays within `[min, max]` minus
/// `margin` on both ends. Spans larger than the room pin to the start edge.
#[must_use]
pub fn clamp_span(start: f64, len: f64, min: f64, max: f64, margin: f64) -> f64 {
    let lo = min + margin;
    let hi = max - margin - len;
    if hi < lo {
        return lo;
    }
    start.clamp(lo, hi)
}

/// Convert a DOM rect into a [`Rect`].
#[cfg(feature = "hydrate")]
pub fn rect_from_dom(rect: &web_sys::DomRect) -> Rect {
    Rect::new(rect.left(), rect.top(), rect.width(), rect.height())
}

/// Current viewport size, or zero outside the browser.
pub fn viewport_size() -> Size {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return Size::default();
        };
        let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        Size::new(width, height)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Size::default()
    }
}
