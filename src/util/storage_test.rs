use super::*;

#[test]
fn namespaced_key_adds_prefix_once() {
    assert_eq!(namespaced_key("theme"), "trade_widgets:theme");
    assert_eq!(namespaced_key("trade_widgets:theme"), "trade_widgets:theme");
}

#[test]
fn decode_json_reports_key_on_corrupt_entry() {
    let err = decode_json::<Vec<String>>("trade_widgets:acc", "{not json").unwrap_err();
    match err {
        StorageError::Decode { key, .. } => assert_eq!(key, "trade_widgets:acc"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn encode_then_decode_preserves_value() {
    let raw = encode_json("k", &vec!["a".to_owned(), "b".to_owned()]).expect("encode");
    assert_eq!(raw, r#"["a","b"]"#);
    let back: Vec<String> = decode_json("k", &raw).expect("decode");
    assert_eq!(back, vec!["a", "b"]);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn storage_is_unavailable_outside_browser() {
    assert!(matches!(try_load_json::<bool>("x"), Err(StorageError::Unavailable)));
    assert!(matches!(try_save_json("x", &true), Err(StorageError::Unavailable)));
    assert_eq!(load_json::<bool>("x"), None);
    save_json("x", &true);
    remove("x");
}

#[test]
fn error_messages_name_the_key() {
    let err = StorageError::Write { key: "trade_widgets:toasts".to_owned() };
    assert_eq!(err.to_string(), "localStorage rejected write for trade_widgets:toasts");
    assert_eq!(StorageError::Unavailable.to_string(), "localStorage is unavailable");
}
