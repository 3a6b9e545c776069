//! Draft lifecycle controller.
//!
//! The wizard obtains a draft on entry, autosaves the title on blur, and
//! ends in exactly one of two ways:
//!
//! - **commit**: finish the import, then one combined update, then navigate
//!   to the project's data view
//! - **cancel**: delete the draft (result ignored), then navigate back to the
//!   project list
//!
//! Every remote operation takes `&mut self`, so one wizard never has two
//! remote chains in flight.

use crate::{
    AutosaveOutcome, AutosaveSkip, CancelOutcome, CommitBlocked, CommitOutcome, ControlState,
    ProjectForm, StepChange, StepGates, StepMachine, WizardExit, WizardSettings, WizardView,
};

use log::{debug, info, warn};
use pw_core::{
    DraftClient, DraftProject, ImportPhase, NavigationMode, Navigator, Route, WizardStep,
};
use tokio::sync::watch;

type CloseCallback = Box<dyn FnOnce() + Send>;

pub struct ProjectWizard<C, I, N> {
    client: C,
    import: I,
    navigator: N,
    draft: Option<DraftProject>,
    form: ProjectForm,
    steps: StepMachine,
    waiting: bool,
    /// `finish_upload` is running as part of a commit
    importing: bool,
    exit: Option<WizardExit>,
    on_close: Option<CloseCallback>,
    view_tx: watch::Sender<WizardView>,
}

impl<C, I, N> ProjectWizard<C, I, N>
where
    C: DraftClient,
    I: ImportPhase,
    N: Navigator,
{
    /// Create a wizard without a draft yet; call `load_draft` next.
    pub fn new(client: C, import: I, navigator: N, settings: WizardSettings) -> Self {
        let form = ProjectForm::new(settings.default_label_config);
        let steps = StepMachine::new(settings.tab_guard);
        let initial = WizardView {
            active_step: steps.active(),
            tabs: steps.tabs(StepGates::default()),
            draft_id: None,
            title_error: None,
            body: form.body(),
            columns: Vec::new(),
            commit: ControlState::default(),
            cancel: ControlState::default(),
            exit: None,
        };
        let (view_tx, _) = watch::channel(initial);

        let wizard = Self {
            client,
            import,
            navigator,
            draft: None,
            form,
            steps,
            waiting: false,
            importing: false,
            exit: None,
            on_close: None,
            view_tx,
        };
        wizard.publish();
        wizard
    }

    /// Create a wizard and obtain its draft
    pub async fn open(client: C, import: I, navigator: N, settings: WizardSettings) -> Self {
        let mut wizard = Self::new(client, import, navigator, settings);
        wizard.load_draft().await;
        wizard
    }

    /// Callback run once after the wizard is cancelled
    pub fn with_close_callback(mut self, on_close: impl FnOnce() + Send + 'static) -> Self {
        self.on_close = Some(Box::new(on_close));
        self
    }

    /// Obtain the draft from the client. Does nothing once a draft is held.
    pub async fn load_draft(&mut self) -> bool {
        if self.draft.is_some() {
            return true;
        }
        if self.exit.is_some() {
            return false;
        }

        match self.client.provide_draft().await {
            Ok(draft) => {
                debug!("Draft project {} ready ('{}')", draft.id, draft.title);
                self.form.seed_title(&draft.title);
                self.draft = Some(draft);
                self.publish();
                true
            }
            Err(e) => {
                warn!("Could not obtain a draft project: {}", e);
                false
            }
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn draft(&self) -> Option<&DraftProject> {
        self.draft.as_ref()
    }

    pub fn form(&self) -> &ProjectForm {
        &self.form
    }

    pub fn import(&self) -> &I {
        &self.import
    }

    pub fn active_step(&self) -> WizardStep {
        self.steps.active()
    }

    pub fn is_waiting(&self) -> bool {
        self.waiting
    }

    pub fn exit(&self) -> Option<WizardExit> {
        self.exit
    }

    /// Receive a fresh `WizardView` after every state change
    pub fn subscribe(&self) -> watch::Receiver<WizardView> {
        self.view_tx.subscribe()
    }

    /// Republish the view after the import phase changed its own state
    /// (files staged or cleared through `import()`).
    pub fn refresh(&self) {
        self.publish();
    }

    // =========================================================================
    // Editing
    // =========================================================================

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.form.set_title(value);
        self.publish();
    }

    pub fn set_description(&mut self, value: impl Into<String>) {
        self.form.set_description(value);
        self.publish();
    }

    pub fn set_label_config(&mut self, value: impl Into<String>) {
        self.form.set_label_config(value);
        self.publish();
    }

    pub fn select_step(&mut self, target: WizardStep) -> StepChange {
        let change = self.steps.select(target, self.gates());
        if change != StepChange::Refused {
            self.publish();
        }
        change
    }

    /// Autosave the title when the name field loses focus
    pub async fn save_name(&mut self) -> AutosaveOutcome {
        if self.exit.is_some() {
            return AutosaveOutcome::Skipped(AutosaveSkip::Exited);
        }
        if self.form.has_title_error() {
            return AutosaveOutcome::Skipped(AutosaveSkip::PendingError);
        }
        let Some(id) = self.draft.as_ref().map(|d| d.id) else {
            return AutosaveOutcome::Skipped(AutosaveSkip::NoDraft);
        };

        let title = self.form.title().to_string();
        match self.client.update_title(id, &title).await {
            Ok(update) if update.ok => {
                debug!("Title of draft {} saved as '{}'", id, title);
                AutosaveOutcome::Saved
            }
            Ok(update) => {
                let message = update.title_error().map(String::from);
                debug!("Title '{}' rejected: {:?}", title, message);
                self.form.reject_title(message.clone());
                self.publish();
                AutosaveOutcome::Rejected { message }
            }
            Err(e) => {
                warn!("Autosave of draft {} failed: {}", id, e);
                AutosaveOutcome::Failed
            }
        }
    }

    /// Enter in the name form: suppressed while the title is rejected
    pub async fn submit_name(&mut self) -> CommitOutcome {
        if self.form.has_title_error() {
            return CommitOutcome::Blocked(CommitBlocked::TitleError);
        }
        self.commit().await
    }

    // =========================================================================
    // Terminal transitions
    // =========================================================================

    /// First reason the commit control is disabled, if any
    pub fn commit_blocked(&self) -> Option<CommitBlocked> {
        if self.exit.is_some() {
            Some(CommitBlocked::Exited)
        } else if self.draft.is_none() {
            Some(CommitBlocked::NoDraft)
        } else if self.import.upload_disabled() {
            Some(CommitBlocked::UploadDisabled)
        } else if self.form.has_title_error() {
            Some(CommitBlocked::TitleError)
        } else {
            None
        }
    }

    pub async fn commit(&mut self) -> CommitOutcome {
        if let Some(reason) = self.commit_blocked() {
            debug!("Commit blocked: {:?}", reason);
            return CommitOutcome::Blocked(reason);
        }
        let Some(draft) = self.draft.clone() else {
            return CommitOutcome::Blocked(CommitBlocked::NoDraft);
        };

        self.importing = true;
        self.publish();
        let imported = self.import.finish_upload(&draft).await;
        self.importing = false;

        if !imported {
            info!("Import for draft {} incomplete, commit aborted", draft.id);
            self.publish();
            return CommitOutcome::ImportIncomplete;
        }

        self.waiting = true;
        self.publish();

        let body = self.form.body();
        let result = self.client.update_project(draft.id, &body).await;

        self.waiting = false;

        match result {
            Ok(project) => {
                self.draft = None;
                self.exit = Some(WizardExit::Committed(project.id));
                self.publish();
                self.navigator
                    .navigate(project.data_route(), NavigationMode::Push);
                info!("Project {} committed as '{}'", project.id, body.title);
                CommitOutcome::Committed(project)
            }
            Err(e) => {
                self.publish();
                warn!("Commit of draft {} failed: {}", draft.id, e);
                CommitOutcome::UpdateFailed
            }
        }
    }

    /// Discard the draft and leave. Always navigates, even if the delete fails.
    pub async fn cancel(&mut self) -> CancelOutcome {
        if self.exit.is_some() {
            return CancelOutcome::AlreadyExited;
        }

        self.waiting = true;
        self.publish();

        let draft_id = match self.draft.take() {
            Some(draft) => {
                if let Err(e) = self.client.delete_project(draft.id).await {
                    warn!("Delete of draft {} failed, ignoring: {}", draft.id, e);
                }
                Some(draft.id)
            }
            None => None,
        };

        self.waiting = false;
        self.exit = Some(WizardExit::Cancelled);
        self.publish();

        self.navigator
            .navigate(Route::ProjectList, NavigationMode::Replace);
        if let Some(on_close) = self.on_close.take() {
            on_close();
        }

        info!("Wizard cancelled (draft: {:?})", draft_id);
        CancelOutcome::Cancelled { draft_id }
    }

    /// Dismissing the wizard is a cancel
    pub async fn close(&mut self) -> CancelOutcome {
        self.cancel().await
    }

    // =========================================================================
    // View
    // =========================================================================

    fn gates(&self) -> StepGates {
        StepGates {
            title_error: self.form.has_title_error(),
            upload_disabled: self.import.upload_disabled(),
        }
    }

    pub fn view(&self) -> WizardView {
        let exited = self.exit.is_some();

        WizardView {
            active_step: self.steps.active(),
            tabs: self.steps.tabs(self.gates()),
            draft_id: self.draft.as_ref().map(|d| d.id),
            title_error: self.form.title_error().map(String::from),
            body: self.form.body(),
            columns: self.import.columns(),
            commit: ControlState {
                disabled: self.commit_blocked().is_some(),
                waiting: self.waiting || self.importing || self.import.uploading(),
            },
            cancel: ControlState {
                disabled: self.waiting || exited,
                waiting: self.waiting,
            },
            exit: self.exit,
        }
    }

    fn publish(&self) {
        self.view_tx.send_replace(self.view());
    }
}
