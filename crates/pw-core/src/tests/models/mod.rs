mod draft_project;
mod route;
mod title_update;
mod wizard_step;
