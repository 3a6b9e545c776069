use crate::TitleUpdate;

#[test]
fn test_accepted_has_no_title_error() {
    assert_eq!(TitleUpdate::accepted().title_error(), None);
}

#[test]
fn test_rejected_exposes_title_error() {
    let update = TitleUpdate::rejected(Some("This field is required.".to_string()));
    assert!(!update.ok);
    assert_eq!(update.title_error(), Some("This field is required."));
}

#[test]
fn test_rejected_without_message() {
    assert_eq!(TitleUpdate::rejected(None).title_error(), None);
}

#[test]
fn test_ok_update_ignores_stray_errors() {
    let update: TitleUpdate = serde_json::from_value(serde_json::json!({
        "ok": true,
        "errors": { "title": "stale" }
    }))
    .unwrap();
    assert_eq!(update.title_error(), None);
}
