//! Shared overlay behaviour: focus trap cycling, scroll lock depth, drawers.
//!
//! DESIGN
//! ======
//! Modal, drawer, and shortcut-help overlays agree on these rules. Keeping
//! them DOM-free lets the wrap-around and nesting behaviour be tested natively.

#[cfg(test)]
#[path = "overlay_test.rs"]
mod overlay_test;

/// Index of the element that should receive focus after a Tab press.
///
/// `current` is the position of the focused element within the trap, or
/// `None` when focus is outside it. Returns `None` when nothing is focusable.
#[must_use]
pub fn next_focus_index(count: usize, current: Option<usize>, backwards: bool) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let last = count - 1;
    let next = match (current, backwards) {
        (None, false) => 0,
        (None, true) => last,
        (Some(i), false) if i >= last => 0,
        (Some(i), false) => i + 1,
        (Some(0), true) => last,
        (Some(i), true) => i.min(count) - 1,
    };
    Some(next)
}

/// Window-level key handling for an open overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrayKey {
    Close,
    /// Pull focus back into the panel.
    Refocus,
}

/// Action for a key press that reached the window while an overlay is open.
///
/// Presses from inside the panel were already handled by its own listener.
#[must_use]
pub fn stray_key_action(key: &str, focus_inside: bool) -> Option<StrayKey> {
    if focus_inside {
        return None;
    }
    match key {
        "Escape" => Some(StrayKey::Close),
        "Tab" => Some(StrayKey::Refocus),
        _ => None,
    }
}

/// Reference-counted body scroll lock for nested overlays.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScrollLock {
    depth: u32,
}

impl ScrollLock {
    /// Take a reference. Returns `true` when the lock should be applied.
    pub fn acquire(&mut self) -> bool {
        self.depth += 1;
        self.depth == 1
    }

    /// Drop a reference. Returns `true` when the lock should be lifted.
    pub fn release(&mut self) -> bool {
        if self.depth == 0 {
            return false;
        }
        self.depth -= 1;
        self.depth == 0
    }

    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }
}

/// Screen edge a drawer slides in from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DrawerSide {
    Left,
    #[default]
    Right,
    Top,
    Bottom,
}

impl DrawerSide {
    #[must_use]
    pub fn modifier(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }

    #[must_use]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

pub const DEFAULT_DRAWER_SIZE_PX: f64 = 360.0;

/// Open state and geometry of one drawer.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawerState {
    pub open: bool,
    pub side: DrawerSide,
    pub size_px: f64,
}

impl Default for DrawerState {
    fn default() -> Self {
        Self { open: false, side: DrawerSide::Right, size_px: DEFAULT_DRAWER_SIZE_PX }
    }
}

impl DrawerState {
    #[must_use]
    pub fn new(side: DrawerSide) -> Self {
        Self { side, ..Self::default() }
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Inline style for the panel: its size on the sliding axis.
    #[must_use]
    pub fn size_style(&self) -> String {
        let size = self.size_px.max(0.0);
        if self.side.is_horizontal() {
            format!("width: {size}px")
        } else {
            format!("height: {size}px")
        }
    }
}

impl DrawerState {
    /// Full inline style for the panel. A closed panel is also hidden so its
    /// controls drop out of the tab order.
    #[must_use]
    pub fn panel_style(&self) -> String {
        let mut style = format!("{}; transform: {};", self.size_style(), drawer_transform(self.side, self.open));
        if !self.open {
            style.push_str(" visibility: hidden;");
        }
        style
    }
}

/// CSS transform placing the drawer panel on or off screen.
#[must_use]
pub fn drawer_transform(side: DrawerSide, open: bool) -> &'static str {
    if open {
        return "translate(0, 0)";
    }
    match side {
        DrawerSide::Left => "translateX(-100%)",
        DrawerSide::Right => "translateX(100%)",
        DrawerSide::Top => "translateY(-100%)",
        DrawerSide::Bottom => "translateY(100%)",
    }
}
