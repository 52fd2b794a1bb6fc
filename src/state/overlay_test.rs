use super::*;

// =============================================================
// Focus trap
// =============================================================

#[test]
fn next_focus_index_none_without_focusables() {
    assert_eq!(next_focus_index(0, None, false), None);
    assert_eq!(next_focus_index(0, Some(0), true), None);
}

#[test]
fn next_focus_index_wraps_forward_from_last() {
    assert_eq!(next_focus_index(3, Some(2), false), Some(0));
    assert_eq!(next_focus_index(3, Some(0), false), Some(1));
}

#[test]
fn next_focus_index_wraps_backward_from_first() {
    assert_eq!(next_focus_index(3, Some(0), true), Some(2));
    assert_eq!(next_focus_index(3, Some(2), true), Some(1));
}

#[test]
fn next_focus_index_enters_trap_from_outside() {
    assert_eq!(next_focus_index(4, None, false), Some(0));
    assert_eq!(next_focus_index(4, None, true), Some(3));
}

#[test]
fn next_focus_index_single_element_stays_put() {
    assert_eq!(next_focus_index(1, Some(0), false), Some(0));
    assert_eq!(next_focus_index(1, Some(0), true), Some(0));
}

// =============================================================
// Scroll lock
// =============================================================

#[test]
fn scroll_lock_applies_on_first_and_lifts_on_last() {
    let mut lock = ScrollLock::default();
    assert!(lock.acquire());
    assert!(!lock.acquire());
    assert_eq!(lock.depth(), 2);
    assert!(!lock.release());
    assert!(lock.release());
    assert_eq!(lock.depth(), 0);
}

#[test]
fn scroll_lock_release_without_acquire_is_ignored() {
    let mut lock = ScrollLock::default();
    assert!(!lock.release());
    assert_eq!(lock.depth(), 0);
}

// =============================================================
// Drawer
// =============================================================

#[test]
fn drawer_state_defaults_closed_on_right() {
    let drawer = DrawerState::default();
    assert!(!drawer.open);
    assert_eq!(drawer.side, DrawerSide::Right);
    assert_eq!(drawer.size_px, DEFAULT_DRAWER_SIZE_PX);
}

#[test]
fn drawer_toggle_flips_open() {
    let mut drawer = DrawerState::new(DrawerSide::Left);
    drawer.toggle();
    assert!(drawer.open);
    drawer.toggle();
    assert!(!drawer.open);
    drawer.open();
    drawer.close();
    assert!(!drawer.open);
}

#[test]
fn drawer_transform_hides_toward_its_edge() {
    assert_eq!(drawer_transform(DrawerSide::Left, false), "translateX(-100%)");
    assert_eq!(drawer_transform(DrawerSide::Bottom, false), "translateY(100%)");
    assert_eq!(drawer_transform(DrawerSide::Top, true), "translate(0, 0)");
}

#[test]
fn drawer_size_style_uses_sliding_axis() {
    let mut drawer = DrawerState::new(DrawerSide::Top);
    drawer.size_px = 240.0;
    assert_eq!(drawer.size_style(), "height: 240px");
    drawer.side = DrawerSide::Right;
    assert_eq!(drawer.size_style(), "width: 240px");
}

#[test]
fn closed_drawer_panel_is_hidden() {
    let mut drawer = DrawerState::new(DrawerSide::Left);
    drawer.size_px = 300.0;
    assert_eq!(drawer.panel_style(), "width: 300px; transform: translateX(-100%); visibility: hidden;");
    drawer.open();
    assert_eq!(drawer.panel_style(), "width: 300px; transform: translate(0, 0);");
}

// =============================================================
// Keys reaching the window
// =============================================================

#[test]
fn escape_outside_panel_closes() {
    assert_eq!(stray_key_action("Escape", false), Some(StrayKey::Close));
}

#[test]
fn tab_outside_panel_refocuses() {
    assert_eq!(stray_key_action("Tab", false), Some(StrayKey::Refocus));
}

#[test]
fn keys_from_inside_panel_are_left_alone() {
    assert_eq!(stray_key_action("Escape", true), None);
    assert_eq!(stray_key_action("Tab", true), None);
    assert_eq!(stray_key_action("a", false), None);
}
