//! pw-wizard
//!
//! Step sequencing, gating and the commit/cancel lifecycle of the project
//! setup wizard. Remote work goes through the `pw-core` ports.

mod outcome;
mod project_form;
mod project_wizard;
mod step_machine;
mod wizard_settings;
mod wizard_view;

#[cfg(test)]
mod tests;

pub use outcome::{
    AutosaveOutcome, AutosaveSkip, CancelOutcome, CommitBlocked, CommitOutcome, StepChange,
    WizardExit,
};
pub use project_form::ProjectForm;
pub use project_wizard::ProjectWizard;
pub use step_machine::{StepGates, StepMachine, StepTab, TabGuard};
pub use wizard_settings::WizardSettings;
pub use wizard_view::{ControlState, WizardView};
