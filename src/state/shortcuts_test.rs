use super::*;

fn registry() -> ShortcutRegistry {
    let mut reg = ShortcutRegistry::new(Platform::Other);
    reg.register("palette", "Mod+K", "Open command palette", "General").expect("palette");
    reg.register("help", "Shift+?", "Show keyboard shortcuts", "General").expect("help");
    reg.register("buy", "B", "Open buy ticket", "Trading").expect("buy");
    reg.register("sell", "S", "Open sell ticket", "Trading").expect("sell");
    reg.register("close", "Esc", "Close overlay", "Navigation").expect("close");
    reg
}

// =============================================================
// Chord parsing
// =============================================================

#[test]
fn parse_resolves_mod_per_platform() {
    let mac = KeyChord::parse("Mod+K", Platform::Mac).expect("mac");
    assert!(mac.meta && !mac.ctrl);
    let other = KeyChord::parse("Mod+K", Platform::Other).expect("other");
    assert!(other.ctrl && !other.meta);
    assert_eq!(other.key, "k");
}

#[test]
fn parse_handles_plus_key_and_named_keys() {
    let plus = KeyChord::parse("Ctrl++", Platform::Other).expect("plus");
    assert_eq!(plus.key, "+");
    assert!(plus.ctrl);
    assert_eq!(KeyChord::parse("esc", Platform::Other).expect("esc").key, "Escape");
    assert_eq!(KeyChord::parse("arrowup", Platform::Other).expect("up").key, "ArrowUp");
}

#[test]
fn parse_rejects_blank_and_unknown_modifier() {
    assert_eq!(KeyChord::parse("  ", Platform::Other), Err(ShortcutError::Empty));
    assert_eq!(
        KeyChord::parse("Hyper+K", Platform::Other),
        Err(ShortcutError::UnknownModifier("Hyper".to_owned()))
    );
}

#[test]
fn display_uses_platform_glyphs() {
    let chord = KeyChord::parse("Mod+Shift+K", Platform::Mac).expect("chord");
    assert_eq!(chord.display(Platform::Mac), "⇧⌘K");
    let chord = KeyChord::parse("Mod+Shift+K", Platform::Other).expect("chord");
    assert_eq!(chord.display(Platform::Other), "Ctrl+Shift+K");
    assert_eq!(KeyChord::parse("Escape", Platform::Other).expect("esc").display(Platform::Other), "Esc");
}

#[test]
fn symbol_keys_ignore_shift_when_matching() {
    let bound = KeyChord::parse("?", Platform::Other).expect("chord");
    let event = KeyChord::from_event_parts("?", false, false, true, false);
    assert!(bound.matches(&event));
    let letter = KeyChord::parse("K", Platform::Other).expect("chord");
    assert!(!letter.matches(&KeyChord::from_event_parts("K", false, false, true, false)));
}

#[test]
fn platform_from_user_agent() {
    assert_eq!(Platform::from_user_agent("Mozilla/5.0 (Macintosh; Intel Mac OS X 14_0)"), Platform::Mac);
    assert_eq!(Platform::from_user_agent("Mozilla/5.0 (X11; Linux x86_64)"), Platform::Other);
}

// =============================================================
// Registry
// =============================================================

#[test]
fn register_rejects_conflicting_chord() {
    let mut reg = registry();
    let err = reg.register("other", "Ctrl+K", "Something else", "General").unwrap_err();
    assert_eq!(err, ShortcutError::Conflict { chord: "Ctrl+K".to_owned(), existing: "palette".to_owned() });
}

#[test]
fn register_rejects_chord_differing_only_in_ignored_shift() {
    let mut reg = ShortcutRegistry::new(Platform::Other);
    reg.register("help", "Shift+?", "Show help", "General").unwrap();
    let err = reg.register("quick", "?", "Quick help", "General").unwrap_err();
    assert!(matches!(err, ShortcutError::Conflict { ref existing, .. } if existing == "help"));

    let press = KeyChord::from_event_parts("?", false, false, true, false);
    let hits: Vec<&str> = reg.all().iter().filter(|s| s.chord.matches(&press)).map(|s| s.id.as_str()).collect();
    assert_eq!(hits, vec!["help"]);
}

#[test]
fn register_allows_letter_chords_differing_in_shift() {
    let mut reg = ShortcutRegistry::new(Platform::Other);
    reg.register("theme", "Shift+D", "Toggle theme", "View").unwrap();
    assert!(reg.register("depth", "D", "Depth chart", "View").is_ok());
}

#[test]
fn register_rejects_duplicate_id() {
    let mut reg = registry();
    assert_eq!(reg.register("buy", "Shift+B", "x", "y"), Err(ShortcutError::DuplicateId("buy".to_owned())));
}

#[test]
fn match_event_finds_binding() {
    let reg = registry();
    let event = KeyChord::from_event_parts("k", true, false, false, false);
    assert_eq!(reg.match_event(&event).map(|s| s.id.as_str()), Some("palette"));
    let event = KeyChord::from_event_parts("Escape", false, false, false, false);
    assert_eq!(reg.match_event(&event).map(|s| s.id.as_str()), Some("close"));
    let event = KeyChord::from_event_parts("x", false, false, false, false);
    assert!(reg.match_event(&event).is_none());
}

#[test]
fn grouped_keeps_registration_order() {
    let reg = registry();
    let groups = reg.grouped();
    let names: Vec<_> = groups.iter().map(|(name, _)| *name).collect();
    assert_eq!(names, vec!["General", "Trading", "Navigation"]);
    assert_eq!(groups[1].1.len(), 2);
}

#[test]
fn search_matches_description_group_and_keys() {
    let reg = registry();
    let ids = |hits: Vec<&Shortcut>| hits.into_iter().map(|s| s.id.clone()).collect::<Vec<_>>();
    assert_eq!(ids(reg.search("ticket")), vec!["buy", "sell"]);
    assert_eq!(ids(reg.search("navigation")), vec!["close"]);
    assert_eq!(ids(reg.search("ctrl+k")), vec!["palette"]);
    assert_eq!(reg.search("").len(), 5);
}

#[test]
fn discovery_tracks_used_shortcuts() {
    let mut reg = registry();
    assert!(reg.mark_used("buy"));
    assert!(!reg.mark_used("buy"));
    assert!(!reg.mark_used("missing"));
    assert!(reg.is_used("buy"));
    assert_eq!(reg.undiscovered().len(), 4);

    let mut restored = registry();
    restored.restore_used(reg.used_ids());
    assert!(restored.is_used("buy"));
}

#[test]
fn unregister_removes_binding() {
    let mut reg = registry();
    reg.unregister("buy");
    assert!(reg.match_event(&KeyChord::from_event_parts("b", false, false, false, false)).is_none());
}
