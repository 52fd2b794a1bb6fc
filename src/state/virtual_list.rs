//! Window computation for fixed-row-height virtualized lists.

#[cfg(test)]
#[path = "virtual_list_test.rs"]
mod virtual_list_test;

pub const DEFAULT_OVERSCAN: usize = 4;

/// Rows to render for the current scroll position.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct VisibleRange {
    /// First rendered index (inclusive).
    pub start: usize,
    /// One past the last rendered index.
    pub end: usize,
    /// Offset of row `start` from the top of the scroll content.
    pub offset_top: f64,
    /// Height of the full list, for the spacer element.
    pub total_height: f64,
}

impl VisibleRange {
    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Compute which rows intersect the viewport, plus `overscan` rows each side.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn visible_range(
    item_count: usize,
    item_height: f64,
    viewport_height: f64,
    scroll_top: f64,
    overscan: usize,
) -> VisibleRange {
    if item_count == 0 || item_height.is_nan() || item_height <= 0.0 {
        return VisibleRange::default();
    }
    let total_height = item_count as f64 * item_height;
    let scroll_top = if scroll_top.is_finite() { scroll_top.clamp(0.0, total_height) } else { 0.0 };
    let viewport_height = viewport_height.max(0.0);

    let first = ((scroll_top / item_height).floor() as usize).min(item_count);
    let last = (((scroll_top + viewport_height) / item_height).ceil() as usize).min(item_count);

    let start = first.saturating_sub(overscan);
    let end = last.saturating_add(overscan).min(item_count);
    VisibleRange { start, end, offset_top: start as f64 * item_height, total_height }
}

/// Smallest change to `current_scroll` that shows row `index` entirely.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn scroll_top_for_index(index: usize, item_height: f64, viewport_height: f64, current_scroll: f64) -> f64 {
    let top = index as f64 * item_height;
    let bottom = top + item_height;
    if top < current_scroll {
        top
    } else if bottom > current_scroll + viewport_height {
        (bottom - viewport_height).max(0.0)
    } else {
        current_scroll
    }
}
