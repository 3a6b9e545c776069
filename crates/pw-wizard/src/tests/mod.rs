
use crate::{ProjectWizard, WizardSettings, WizardView};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use pw_core::{
    CoreError, DraftClient, DraftProject, ImportPhase, NavigationMode, Navigator, Project,
    ProjectBody, ProjectId, Result as CoreErrorResult, Route, TitleUpdate,
};
use tokio::sync::watch;

/// Every boundary call, in the order the wizard made it
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    ProvideDraft,
    UpdateTitle(ProjectId, String),
    FinishUpload(ProjectId),
    UpdateProject(ProjectId, ProjectBody),
    DeleteProject(ProjectId),
    Navigate(Route, NavigationMode),
}

#[derive(Clone, Default)]
pub(crate) struct CallLog(Arc<Mutex<Vec<Call>>>);

impl CallLog {
    fn push(&self, call: Call) {
        self.0.lock().unwrap().push(call);
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.0.lock().unwrap().clone()
    }

    pub(crate) fn navigations(&self) -> Vec<(Route, NavigationMode)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Navigate(route, mode) => Some((route, mode)),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn contains_update(&self) -> bool {
        self.calls()
            .iter()
            .any(|call| matches!(call, Call::UpdateProject(..)))
    }
}

// =========================================================================
// Fakes
// =========================================================================

pub(crate) struct FakeClient {
    log: CallLog,
    draft: Option<DraftProject>,
    title_response: Mutex<TitleUpdate>,
    /// `None` makes the combined update fail
    committed: Option<Project>,
    delete_fails: bool,
    view_probe: ViewProbe,
    waiting_seen: WaitingSeen,
}

impl FakeClient {
    pub(crate) fn with_draft(log: &CallLog, id: ProjectId) -> Self {
        Self {
            log: log.clone(),
            draft: Some(DraftProject::new(id, format!("New Project #{}", id))),
            title_response: Mutex::new(TitleUpdate::accepted()),
            committed: Some(project(id)),
            delete_fails: false,
            view_probe: Arc::default(),
            waiting_seen: Arc::default(),
        }
    }

    pub(crate) fn without_draft(log: &CallLog) -> Self {
        Self {
            draft: None,
            ..Self::with_draft(log, 0)
        }
    }

    pub(crate) fn committing_as(mut self, project: Option<Project>) -> Self {
        self.committed = project;
        self
    }

    pub(crate) fn failing_delete(mut self) -> Self {
        self.delete_fails = true;
        self
    }

    pub(crate) fn answer_title(&self, update: TitleUpdate) {
        *self.title_response.lock().unwrap() = update;
    }

    /// Record `commit.waiting` as seen from inside remote calls
    pub(crate) fn probe(&self) -> (ViewProbe, WaitingSeen) {
        (self.view_probe.clone(), self.waiting_seen.clone())
    }

    fn observe_waiting(&self) {
        record_waiting(&self.view_probe, &self.waiting_seen);
    }
}

pub(crate) type ViewProbe = Arc<Mutex<Option<watch::Receiver<WizardView>>>>;
pub(crate) type WaitingSeen = Arc<Mutex<Vec<bool>>>;

fn record_waiting(probe: &ViewProbe, seen: &WaitingSeen) {
    if let Some(rx) = probe.lock().unwrap().as_ref() {
        seen.lock().unwrap().push(rx.borrow().commit.waiting);
    }
}

#[async_trait]
impl DraftClient for FakeClient {
    async fn provide_draft(&self) -> CoreErrorResult<DraftProject> {
        self.log.push(Call::ProvideDraft);
        self.draft
            .clone()
            .ok_or_else(|| CoreError::remote("draft service unavailable"))
    }

    async fn update_title(&self, id: ProjectId, title: &str) -> CoreErrorResult<TitleUpdate> {
        self.log.push(Call::UpdateTitle(id, title.to_string()));
        Ok(self.title_response.lock().unwrap().clone())
    }

    async fn update_project(&self, id: ProjectId, body: &ProjectBody) -> CoreErrorResult<Project> {
        self.log.push(Call::UpdateProject(id, body.clone()));
        self.observe_waiting();
        self.committed
            .clone()
            .ok_or_else(|| CoreError::remote("update rejected"))
    }

    async fn delete_project(&self, id: ProjectId) -> CoreErrorResult<()> {
        self.log.push(Call::DeleteProject(id));
        self.observe_waiting();
        if self.delete_fails {
            return Err(CoreError::remote("delete failed"));
        }
        Ok(())
    }
}

pub(crate) struct FakeImport {
    log: CallLog,
    pub(crate) upload_disabled: AtomicBool,
    pub(crate) uploading: AtomicBool,
    pub(crate) finish_result: AtomicBool,
    pub(crate) columns: Vec<String>,
    view_probe: ViewProbe,
    waiting_seen: WaitingSeen,
}

impl FakeImport {
    pub(crate) fn new(log: &CallLog) -> Self {
        Self {
            log: log.clone(),
            upload_disabled: AtomicBool::new(false),
            uploading: AtomicBool::new(false),
            finish_result: AtomicBool::new(true),
            columns: Vec::new(),
            view_probe: Arc::default(),
            waiting_seen: Arc::default(),
        }
    }

    /// Record `commit.waiting` as published while `finish_upload` runs
    pub(crate) fn probe(&self) -> (ViewProbe, WaitingSeen) {
        (self.view_probe.clone(), self.waiting_seen.clone())
    }

    pub(crate) fn set_upload_disabled(&self, value: bool) {
        self.upload_disabled.store(value, Ordering::SeqCst);
    }
}

#[async_trait]
impl ImportPhase for FakeImport {
    fn upload_disabled(&self) -> bool {
        self.upload_disabled.load(Ordering::SeqCst)
    }

    fn uploading(&self) -> bool {
        self.uploading.load(Ordering::SeqCst)
    }

    async fn finish_upload(&self, draft: &DraftProject) -> bool {
        self.log.push(Call::FinishUpload(draft.id));
        record_waiting(&self.view_probe, &self.waiting_seen);
        self.finish_result.load(Ordering::SeqCst)
    }

    fn columns(&self) -> Vec<String> {
        self.columns.clone()
    }
}

pub(crate) struct FakeNavigator {
    log: CallLog,
}

impl FakeNavigator {
    pub(crate) fn new(log: &CallLog) -> Self {
        Self { log: log.clone() }
    }
}

impl Navigator for FakeNavigator {
    fn navigate(&self, route: Route, mode: NavigationMode) {
        self.log.push(Call::Navigate(route, mode));
    }
}

// =========================================================================
// Helpers
// =========================================================================

pub(crate) type TestWizard = ProjectWizard<FakeClient, FakeImport, FakeNavigator>;

pub(crate) fn project(id: ProjectId) -> Project {
    Project {
        id,
        title: Some(format!("Project {}", id)),
        description: None,
        label_config: None,
        created_at: None,
    }
}

pub(crate) async fn open_wizard(client: FakeClient, log: &CallLog) -> TestWizard {
    ProjectWizard::open(
        client,
        FakeImport::new(log),
        FakeNavigator::new(log),
        WizardSettings::default(),
    )
    .await
}
