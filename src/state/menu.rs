//! Context menu model: item list, placement, and keyboard highlight.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use crate::util::geometry::{Point, Rect, Size, clamp_span};

/// Gap kept between the menu and the viewport edge.
pub const VIEWPORT_MARGIN_PX: f64 = 8.0;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MenuItem {
    pub id: String,
    pub label: String,
    pub shortcut: Option<String>,
    pub disabled: bool,
    pub danger: bool,
    pub separator: bool,
}

impl MenuItem {
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self { id: id.into(), label: label.into(), ..Self::default() }
    }

    #[must_use]
    pub fn separator() -> Self {
        Self { separator: true, disabled: true, ..Self::default() }
    }

    #[must_use]
    pub fn shortcut(mut self, keys: impl Into<String>) -> Self {
        self.shortcut = Some(keys.into());
        self
    }

    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    #[must_use]
    pub fn danger(mut self) -> Self {
        self.danger = true;
        self
    }

    #[must_use]
    pub fn is_selectable(&self) -> bool {
        !self.disabled && !self.separator
    }
}

/// Open/closed state of a context menu.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContextMenuState {
    pub items: Vec<MenuItem>,
    pub open: bool,
    pub position: Point,
    pub highlighted: Option<usize>,
}

impl ContextMenuState {
    #[must_use]
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items, ..Self::default() }
    }

    /// Open at `pointer`, flipping and clamping so a menu of `menu_size` stays
    /// inside `viewport`.
    pub fn open_at(&mut self, pointer: Point, menu_size: Size, viewport: Rect) {
        self.position = place_menu(pointer, menu_size, viewport);
        self.open = true;
        self.highlighted = None;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.highlighted = None;
    }

    pub fn highlight_next(&mut self) {
        self.highlighted = self.step_highlight(true);
    }

    pub fn highlight_prev(&mut self) {
        self.highlighted = self.step_highlight(false);
    }

    /// Highlight a specific item (pointer hover). Ignored for unselectable items.
    pub fn highlight(&mut self, index: usize) {
        if self.items.get(index).is_some_and(MenuItem::is_selectable) {
            self.highlighted = Some(index);
        }
    }

    /// Return the highlighted item id and close, if the item is selectable.
    pub fn activate(&mut self) -> Option<String> {
        let id = self
            .highlighted
            .and_then(|i| self.items.get(i))
            .filter(|item| item.is_selectable())
            .map(|item| item.id.clone())?;
        self.close();
        Some(id)
    }

    /// Activate an item by id (pointer click).
    pub fn activate_id(&mut self, id: &str) -> Option<String> {
        let index = self.items.iter().position(|item| item.id == id)?;
        self.highlighted = Some(index);
        self.activate()
    }

    fn step_highlight(&self, forward: bool) -> Option<usize> {
        let len = self.items.len();
        if len == 0 {
            return None;
        }
        let start = match (self.highlighted, forward) {
            (Some(i), _) => i,
            (None, true) => len - 1,
            (None, false) => 0,
        };
        (1..=len)
            .map(|offset| if forward { (start + offset) % len } else { (start + len * 2 - offset) % len })
            .find(|&i| self.items[i].is_selectable())
    }
}

/// Top-left corner for a menu opened at `pointer`.
///
/// Opens down-right of the pointer, flips left/up when that would overflow,
/// and finally clamps inside the viewport margins.
#[must_use]
pub fn place_menu(pointer: Point, menu: Size, viewport: Rect) -> Point {
    let mut x = pointer.x;
    if x + menu.width > viewport.right() - VIEWPORT_MARGIN_PX {
        x = pointer.x - menu.width;
    }
    let mut y = pointer.y;
    if y + menu.height > viewport.bottom() - VIEWPORT_MARGIN_PX {
        y = pointer.y - menu.height;
    }
    Point::new(
        clamp_span(x, menu.width, viewport.x, viewport.right(), VIEWPORT_MARGIN_PX),
        clamp_span(y, menu.height, viewport.y, viewport.bottom(), VIEWPORT_MARGIN_PX),
    )
}
