use crate::DraftProject;

use async_trait::async_trait;

/// Boundary to the data-import subsystem.
///
/// The wizard reads the two flags and calls `finish_upload`; everything else
/// about the import stays behind this trait.
#[async_trait]
pub trait ImportPhase: Send + Sync {
    /// Current import input is invalid or incomplete
    fn upload_disabled(&self) -> bool;

    /// An upload request is in flight
    fn uploading(&self) -> bool;

    /// Complete any pending import into `draft`. Returns `true` when nothing
    /// is pending.
    async fn finish_upload(&self, draft: &DraftProject) -> bool;

    /// Data columns detected so far, handed to the label config phase
    fn columns(&self) -> Vec<String> {
        Vec::new()
    }
}
