use super::*;

#[test]
fn default_class_is_primary_medium() {
    assert_eq!(button_class(ButtonVariant::default(), ButtonSize::default(), false, false), "btn btn--primary btn--md");
}

#[test]
fn state_modifiers_append_in_order() {
    assert_eq!(
        button_class(ButtonVariant::Danger, ButtonSize::Lg, true, true),
        "btn btn--danger btn--lg btn--loading btn--disabled"
    );
}

#[test]
fn ghost_small_disabled() {
    let class = button_class(ButtonVariant::Ghost, ButtonSize::Sm, false, true);
    assert!(class.contains("btn--ghost"));
    assert!(class.contains("btn--sm"));
    assert!(!class.contains("btn--loading"));
}
