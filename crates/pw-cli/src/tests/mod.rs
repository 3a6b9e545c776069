
use crate::{ConsoleNavigator, Session};

use std::sync::Mutex;

use async_trait::async_trait;
use pw_client::{Client, FileImport};
use pw_core::{
    CoreError, DraftClient, DraftProject, Project, ProjectBody, ProjectId,
    Result as CoreErrorResult, TitleUpdate,
};
use pw_wizard::{ProjectWizard, WizardSettings};

/// Nothing listens here; staging never touches the network
const UNREACHABLE_SERVER: &str = "http://127.0.0.1:9";

pub(crate) struct FakeDraftClient {
    draft_id: ProjectId,
    title_response: Mutex<TitleUpdate>,
}

impl FakeDraftClient {
    pub(crate) fn new(draft_id: ProjectId) -> Self {
        Self {
            draft_id,
            title_response: Mutex::new(TitleUpdate::accepted()),
        }
    }

    pub(crate) fn rejecting_titles(self, message: &str) -> Self {
        *self.title_response.lock().unwrap() = TitleUpdate::rejected(Some(message.to_string()));
        self
    }
}

#[async_trait]
impl DraftClient for FakeDraftClient {
    async fn provide_draft(&self) -> CoreErrorResult<DraftProject> {
        Ok(DraftProject::new(
            self.draft_id,
            format!("New Project #{}", self.draft_id),
        ))
    }

    async fn update_title(&self, _id: ProjectId, _title: &str) -> CoreErrorResult<TitleUpdate> {
        Ok(self.title_response.lock().unwrap().clone())
    }

    async fn update_project(&self, id: ProjectId, body: &ProjectBody) -> CoreErrorResult<Project> {
        if body.title.is_empty() {
            return Err(CoreError::remote("title required"));
        }
        Ok(Project {
            id,
            title: Some(body.title.clone()),
            description: Some(body.description.clone()),
            label_config: Some(body.label_config.clone()),
            created_at: None,
        })
    }

    async fn delete_project(&self, _id: ProjectId) -> CoreErrorResult<()> {
        Ok(())
    }
}

pub(crate) type TestSession = Session<FakeDraftClient, ConsoleNavigator, Vec<u8>>;

pub(crate) async fn open_session(client: FakeDraftClient) -> (TestSession, ConsoleNavigator) {
    let navigator = ConsoleNavigator::new();
    let import = FileImport::new(Client::new(UNREACHABLE_SERVER, None));
    let wizard =
        ProjectWizard::open(client, import, navigator.clone(), WizardSettings::default()).await;
    (Session::new(wizard, Vec::new()), navigator)
}

pub(crate) fn output(session: &TestSession) -> String {
    String::from_utf8_lossy(session.output()).into_owned()
}
