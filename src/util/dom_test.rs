use super::*;

#[test]
fn text_entry_tags_are_editable() {
    assert!(is_editable_tag("INPUT", false));
    assert!(is_editable_tag("textarea", false));
    assert!(is_editable_tag("Select", false));
}

#[test]
fn content_editable_wins_over_tag() {
    assert!(is_editable_tag("DIV", true));
    assert!(!is_editable_tag("DIV", false));
    assert!(!is_editable_tag("BUTTON", false));
}

#[test]
fn focusable_selector_skips_disabled_controls() {
    assert!(FOCUSABLE_SELECTOR.contains("button:not([disabled])"));
    assert!(FOCUSABLE_SELECTOR.contains("[tabindex]:not([tabindex='-1'])"));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn scroll_lock_calls_are_noops_outside_browser() {
    lock_scroll();
    unlock_scroll();
}

#[test]
fn unique_id_never_repeats() {
    let a = unique_id("tooltip");
    let b = unique_id("tooltip");
    assert_ne!(a, b);
    assert!(a.starts_with("tooltip-"));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn reduced_motion_is_off_outside_browser() {
    assert!(!prefers_reduced_motion());
}

#[test]
fn capture_listener_stops_after_remove() {
    let listener = listen_window_capture("scroll", || {});
    let handle = listener.clone();
    assert!(listener.is_active());
    handle.remove();
    assert!(!listener.is_active());
}
