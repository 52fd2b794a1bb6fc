use super::*;

fn timing() -> TypewriterTiming {
    TypewriterTiming { type_ms: 10, delete_ms: 5, hold_ms: 100 }
}

fn phrases(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

#[test]
fn types_one_char_per_tick() {
    let mut tw = Typewriter::new(phrases(&["abc"]), false, timing());
    assert_eq!(tw.visible(), "");
    assert_eq!(tw.tick(), Some(10));
    assert_eq!(tw.visible(), "a");
    assert_eq!(tw.tick(), Some(10));
    assert_eq!(tw.visible(), "ab");
}

#[test]
fn non_looped_finishes_after_last_phrase() {
    let mut tw = Typewriter::new(phrases(&["ab"]), false, timing());
    tw.tick();
    assert_eq!(tw.tick(), None);
    assert_eq!(tw.phase(), Phase::Finished);
    assert_eq!(tw.visible(), "ab");
    assert_eq!(tw.tick(), None);
}

#[test]
fn cycles_hold_delete_next_phrase() {
    let mut tw = Typewriter::new(phrases(&["ab", "xy"]), false, timing());
    tw.tick();
    assert_eq!(tw.tick(), Some(100));
    assert_eq!(tw.phase(), Phase::Holding);
    assert_eq!(tw.tick(), Some(5));
    assert_eq!(tw.phase(), Phase::Deleting);
    assert_eq!(tw.tick(), Some(5));
    assert_eq!(tw.visible(), "a");
    assert_eq!(tw.tick(), Some(10));
    assert_eq!(tw.visible(), "");
    assert_eq!(tw.phrase_index(), 1);
    tw.tick();
    assert_eq!(tw.visible(), "x");
}

#[test]
fn looped_wraps_to_first_phrase() {
    let mut tw = Typewriter::new(phrases(&["a"]), true, timing());
    assert_eq!(tw.tick(), Some(100));
    tw.tick();
    tw.tick();
    assert_eq!(tw.phrase_index(), 0);
    assert_eq!(tw.phase(), Phase::Typing);
}

#[test]
fn visible_slices_on_char_boundaries() {
    let mut tw = Typewriter::new(phrases(&["€→¥"]), false, timing());
    tw.tick();
    assert_eq!(tw.visible(), "€");
    tw.tick();
    assert_eq!(tw.visible(), "€→");
}

#[test]
fn empty_phrase_list_is_finished() {
    let mut tw = Typewriter::new(Vec::new(), true, timing());
    assert_eq!(tw.phase(), Phase::Finished);
    assert_eq!(tw.tick(), None);
    assert_eq!(tw.visible(), "");
}

#[test]
fn finish_shows_last_phrase() {
    let mut tw = Typewriter::new(phrases(&["one", "two"]), true, timing());
    tw.finish();
    assert_eq!(tw.visible(), "two");
    assert_eq!(tw.tick(), None);
}

#[test]
fn reveal_words_marks_prefix_visible() {
    let words = reveal_words("Buy the dip now", 0.5);
    assert_eq!(words, vec![("Buy", true), ("the", true), ("dip", false), ("now", false)]);
}

#[test]
fn reveal_words_clamps_progress() {
    assert!(reveal_words("a b", 2.0).iter().all(|(_, v)| *v));
    assert!(reveal_words("a b", -1.0).iter().all(|(_, v)| !*v));
    assert!(reveal_words("a b", f64::NAN).iter().all(|(_, v)| !*v));
    assert!(reveal_words("", 1.0).is_empty());
}
