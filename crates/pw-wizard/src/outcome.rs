use pw_core::{Project, ProjectId, WizardStep};

/// Result of an autosave on blur
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AutosaveOutcome {
    /// Remote accepted the title
    Saved,
    /// Remote rejected the title; `message` is now the field error (if any)
    Rejected { message: Option<String> },
    /// No call was made
    Skipped(AutosaveSkip),
    /// The call itself failed; state unchanged
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutosaveSkip {
    NoDraft,
    /// A title error is still shown; the next edit clears it
    PendingError,
    Exited,
}

/// Why the commit control is disabled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitBlocked {
    Exited,
    NoDraft,
    UploadDisabled,
    TitleError,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    /// Gate closed; nothing was called
    Blocked(CommitBlocked),
    /// `finish_upload` reported failure; no update was issued
    ImportIncomplete,
    /// The combined update failed; the wizard stays open
    UpdateFailed,
    Committed(Project),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CancelOutcome {
    /// Navigated to the project list. `draft_id` is the draft a delete was
    /// issued for, whether or not the delete succeeded.
    Cancelled { draft_id: Option<ProjectId> },
    AlreadyExited,
}

/// How the wizard ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardExit {
    Committed(ProjectId),
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepChange {
    Changed { from: WizardStep, to: WizardStep },
    Unchanged,
    /// Strict tab guard refused the move
    Refused,
}
