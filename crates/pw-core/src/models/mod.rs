pub mod draft_project;
pub mod draft_title;
pub mod project;
pub mod project_body;
pub mod route;
pub mod title_update;
pub mod wizard_step;
