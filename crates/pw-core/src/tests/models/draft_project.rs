use crate::DraftProject;

#[test]
fn test_draft_project_null_fields_become_empty() {
    let draft: DraftProject = serde_json::from_value(serde_json::json!({
        "id": 7,
        "title": "New Project #1",
        "description": null
    }))
    .unwrap();

    assert_eq!(draft.id, 7);
    assert_eq!(draft.title, "New Project #1");
    assert_eq!(draft.description, "");
    assert_eq!(draft.label_config, "");
}

#[test]
fn test_draft_project_new() {
    let draft = DraftProject::new(3, "Untitled");
    assert_eq!(draft.id, 3);
    assert_eq!(draft.title, "Untitled");
    assert!(draft.description.is_empty());
}
