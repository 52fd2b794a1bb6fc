use super::*;

#[test]
fn toggle_opens_then_closes() {
    let mut state = AccordionState::new(false);
    state.toggle("fees");
    assert!(state.is_open("fees"));
    state.toggle("fees");
    assert!(!state.is_open("fees"));
}

#[test]
fn single_mode_closes_previous_item_when_new_one_opens() {
    let mut state = AccordionState::new(false);
    state.toggle("fees");
    state.toggle("limits");
    assert!(!state.is_open("fees"));
    assert!(state.is_open("limits"));
    assert_eq!(state.expanded(), ["limits".to_owned()]);
}

#[test]
fn multi_mode_keeps_items_open() {
    let mut state = AccordionState::new(true);
    state.toggle("fees");
    state.toggle("limits");
    assert!(state.is_open("fees"));
    assert!(state.is_open("limits"));
}

#[test]
fn open_is_idempotent() {
    let mut state = AccordionState::new(true);
    state.open("a");
    state.open("a");
    assert_eq!(state.expanded().len(), 1);
}

#[test]
fn expand_all_respects_mode() {
    let mut multi = AccordionState::new(true);
    multi.expand_all(["a", "b", "c"]);
    assert_eq!(multi.expanded().len(), 3);

    let mut single = AccordionState::new(false);
    single.expand_all(["a", "b", "c"]);
    assert_eq!(single.expanded(), ["a".to_owned()]);
}

#[test]
fn collapse_all_closes_everything() {
    let mut state = AccordionState::new(true);
    state.expand_all(["a", "b"]);
    state.collapse_all();
    assert!(state.expanded().is_empty());
}

#[test]
fn leaving_multi_mode_keeps_most_recent_item() {
    let mut state = AccordionState::new(true);
    state.open("a");
    state.open("b");
    state.open("c");
    state.set_allow_multiple(false);
    assert!(!state.allow_multiple());
    assert_eq!(state.expanded(), ["c".to_owned()]);
}

#[test]
fn restore_deduplicates_and_applies_mode() {
    let mut state = AccordionState::new(false);
    state.restore(vec!["a".to_owned(), "b".to_owned(), "a".to_owned()]);
    assert_eq!(state.expanded(), ["b".to_owned()]);
}
