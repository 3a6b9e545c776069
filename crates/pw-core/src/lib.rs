pub mod error;
pub mod models;
pub mod ports;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::draft_project::{DraftProject, ProjectId};
pub use models::draft_title::next_draft_title;
pub use models::project::Project;
pub use models::project_body::ProjectBody;
pub use models::route::{NavigationMode, Route};
pub use models::title_update::{TitleErrors, TitleUpdate};
pub use models::wizard_step::WizardStep;
pub use ports::draft_client::DraftClient;
pub use ports::import_phase::ImportPhase;
pub use ports::navigator::Navigator;

/// Label config a new wizard starts from before the config phase edits it.
pub const DEFAULT_LABEL_CONFIG: &str = "<View></View>";
/// Prefix of auto-generated draft titles ("New Project #3").
pub const DEFAULT_DRAFT_TITLE_PREFIX: &str = "New Project #";
