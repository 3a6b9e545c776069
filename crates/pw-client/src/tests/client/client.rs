use crate::Client;
use crate::client::client::title_error;

use serde_json::json;

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let client = Client::new("http://localhost:8080/", None);
    assert_eq!(client.base_url, "http://localhost:8080");
}

#[test]
fn test_base_url_no_trailing_slash() {
    let client = Client::new("http://localhost:8080", None);
    assert_eq!(client.base_url, "http://localhost:8080");
}

#[test]
fn test_token_stored() {
    let client = Client::new("http://localhost:8080", Some("abc123"));
    assert_eq!(client.token, Some("abc123".to_string()));
}

#[test]
fn test_empty_token_ignored() {
    let client = Client::new("http://localhost:8080", Some(""));
    assert!(client.token.is_none());
}

#[test]
fn test_default_draft_title_prefix() {
    let client = Client::new("http://localhost:8080", None);
    assert_eq!(client.draft_title_prefix, "New Project #");
}

#[test]
fn test_from_config_uses_wizard_prefix() {
    let mut config = pw_config::Config::default();
    config.server.url = "http://labels.local/".to_string();
    config.wizard.draft_title_prefix = "Draft ".to_string();

    let client = Client::from_config(&config).unwrap();

    assert_eq!(client.base_url, "http://labels.local");
    assert_eq!(client.draft_title_prefix, "Draft ");
}

#[test]
fn test_title_error_from_validation_errors_list() {
    let body = json!({
        "validation_errors": { "title": ["This field is required."] }
    });
    assert_eq!(
        title_error(&body),
        Some("This field is required.".to_string())
    );
}

#[test]
fn test_title_error_from_validation_errors_string() {
    let body = json!({
        "validation_errors": { "title": "Too long" }
    });
    assert_eq!(title_error(&body), Some("Too long".to_string()));
}

#[test]
fn test_title_error_from_bare_field() {
    let body = json!({ "title": ["Project with this title already exists."] });
    assert_eq!(
        title_error(&body),
        Some("Project with this title already exists.".to_string())
    );
}

#[test]
fn test_title_error_missing() {
    assert_eq!(title_error(&json!({ "detail": "nope" })), None);
    assert_eq!(title_error(&serde_json::Value::Null), None);
}
