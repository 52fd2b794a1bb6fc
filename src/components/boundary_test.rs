use super::*;

#[test]
fn no_errors_reads_unavailable() {
    assert_eq!(fallback_message("Chart", &[]), "Chart is unavailable.");
}

#[test]
fn single_error_is_inlined() {
    let errors = vec!["Chart failed to load".to_owned()];
    assert_eq!(fallback_message("Chart", &errors), "Chart is unavailable: Chart failed to load");
}

#[test]
fn extra_errors_are_counted() {
    let errors = vec!["a".to_owned(), "b".to_owned(), "c".to_owned()];
    assert_eq!(fallback_message("News", &errors), "News is unavailable: a (+2 more)");
}
