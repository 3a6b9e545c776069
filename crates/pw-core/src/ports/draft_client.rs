use crate::{DraftProject, Project, ProjectBody, ProjectId, Result as CoreErrorResult, TitleUpdate};

use async_trait::async_trait;

/// Remote operations the wizard performs against the draft project.
///
/// Implementations report transport and server failures as `Err`; a rejected
/// title is a successful call returning `TitleUpdate { ok: false, .. }`.
#[async_trait]
pub trait DraftClient: Send + Sync {
    /// Obtain or create the draft. Called once per wizard.
    async fn provide_draft(&self) -> CoreErrorResult<DraftProject>;

    /// Save the title alone (autosave on blur)
    async fn update_title(&self, id: ProjectId, title: &str) -> CoreErrorResult<TitleUpdate>;

    /// Combined commit update. `Err` means the commit did not happen.
    async fn update_project(&self, id: ProjectId, body: &ProjectBody) -> CoreErrorResult<Project>;

    /// Discard the draft
    async fn delete_project(&self, id: ProjectId) -> CoreErrorResult<()>;
}
