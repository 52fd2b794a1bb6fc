use super::*;

#[test]
fn cycled_walks_all_three_themes() {
    assert_eq!(Theme::System.cycled(), Theme::Light);
    assert_eq!(Theme::Light.cycled(), Theme::Dark);
    assert_eq!(Theme::Dark.cycled(), Theme::System);
}

#[test]
fn system_theme_follows_media_preference() {
    assert!(Theme::System.is_dark(true));
    assert!(!Theme::System.is_dark(false));
    assert!(Theme::Dark.is_dark(false));
    assert!(!Theme::Light.is_dark(true));
    assert_eq!(Theme::System.attribute(true), "dark");
}

#[test]
fn theme_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Theme::Dark).expect("encode"), r#""dark""#);
    let parsed: Theme = serde_json::from_str(r#""system""#).expect("decode");
    assert_eq!(parsed, Theme::System);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_paths_noop_outside_hydrate() {
    assert_eq!(read_preference(), Theme::System);
    assert!(!system_prefers_dark());
    apply(Theme::Dark);
    assert_eq!(cycle(Theme::Light), Theme::Dark);
}
