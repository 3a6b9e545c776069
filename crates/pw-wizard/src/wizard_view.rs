use crate::{StepTab, WizardExit};

use pw_core::{ProjectBody, ProjectId, WizardStep};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ControlState {
    pub disabled: bool,
    /// Show a busy indicator
    pub waiting: bool,
}

/// Snapshot of everything a front end renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardView {
    pub active_step: WizardStep,
    pub tabs: Vec<StepTab>,
    pub draft_id: Option<ProjectId>,
    pub title_error: Option<String>,
    pub body: ProjectBody,
    pub columns: Vec<String>,
    pub commit: ControlState,
    pub cancel: ControlState,
    pub exit: Option<WizardExit>,
}

impl WizardView {
    pub fn tab(&self, step: WizardStep) -> Option<&StepTab> {
        self.tabs.iter().find(|tab| tab.step == step)
    }
}
