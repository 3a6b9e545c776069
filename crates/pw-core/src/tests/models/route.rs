use crate::{Project, Route};

#[test]
fn test_project_list_path() {
    assert_eq!(Route::ProjectList.path(), "/projects");
}

#[test]
fn test_project_data_path() {
    assert_eq!(Route::ProjectData(42).path(), "/projects/42/data");
    assert_eq!(Route::ProjectData(42).to_string(), "/projects/42/data");
}

#[test]
fn test_project_data_route_uses_project_id() {
    let project: Project = serde_json::from_value(serde_json::json!({
        "id": 42,
        "title": "Birds"
    }))
    .unwrap();

    assert_eq!(project.data_route(), Route::ProjectData(42));
    assert_eq!(project.description, None);
}
