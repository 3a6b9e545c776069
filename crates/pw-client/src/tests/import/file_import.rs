use crate::{Client, FileImport};

use std::io::Write;

use pw_core::ImportPhase;
use tempfile::NamedTempFile;

fn task_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn import() -> FileImport {
    FileImport::new(Client::new("http://localhost:8080", None))
}

#[test]
fn test_nothing_staged_is_enabled() {
    let import = import();
    assert!(!import.upload_disabled());
    assert!(!import.uploading());
    assert!(import.columns().is_empty());
}

#[tokio::test]
async fn test_stage_array_of_tasks() {
    let import = import();
    let file = task_file(r#"[{"data": {"text": "a"}}, {"data": {"text": "b", "lang": "en"}}]"#);

    let count = import.stage(file.path()).await.unwrap();

    assert_eq!(count, 2);
    assert_eq!(import.staged_task_count(), 2);
    assert_eq!(import.staged_files(), vec![file.path().to_path_buf()]);
    assert_eq!(import.columns(), vec!["lang".to_string(), "text".to_string()]);
}

#[tokio::test]
async fn test_stage_single_plain_task() {
    let import = import();
    let file = task_file(r#"{"image": "https://example.com/1.jpg"}"#);

    assert_eq!(import.stage(file.path()).await.unwrap(), 1);
    assert_eq!(import.columns(), vec!["image".to_string()]);
}

#[tokio::test]
async fn test_invalid_file_disables_upload_until_cleared() {
    let import = import();
    let file = task_file("not json");

    let result = import.stage(file.path()).await;

    assert!(result.is_err());
    assert!(import.upload_disabled());

    import.clear();
    assert!(!import.upload_disabled());
}

#[tokio::test]
async fn test_scalar_array_rejected() {
    let import = import();
    let file = task_file("[1, 2, 3]");

    let err = import.stage(file.path()).await.unwrap_err();

    assert!(err.to_string().contains("task object"));
    assert!(import.upload_disabled());
}

#[tokio::test]
async fn test_missing_file_rejected() {
    let import = import();
    assert!(import.stage("/definitely/not/here.json").await.is_err());
    assert!(import.upload_disabled());
}
