use crate::StepChange;

use log::debug;
use pw_core::WizardStep;

/// Whether disabled tabs are styling only or enforced on selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TabGuard {
    /// Disabled tabs are still selectable
    #[default]
    Advisory,
    /// Refuse entering the import tab while uploads are disabled, and refuse
    /// leaving the name tab while its title is rejected
    Strict,
}

/// Inputs that decide which tabs render disabled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepGates {
    pub title_error: bool,
    pub upload_disabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepTab {
    pub step: WizardStep,
    pub active: bool,
    pub disabled: bool,
}

/// Active-step tracker. Starts at `name`; there is no terminal step.
#[derive(Debug, Clone)]
pub struct StepMachine {
    active: WizardStep,
    guard: TabGuard,
}

impl StepMachine {
    pub fn new(guard: TabGuard) -> Self {
        Self {
            active: WizardStep::default(),
            guard,
        }
    }

    pub fn active(&self) -> WizardStep {
        self.active
    }

    pub fn guard(&self) -> TabGuard {
        self.guard
    }

    pub fn is_disabled(step: WizardStep, gates: StepGates) -> bool {
        match step {
            WizardStep::Name => gates.title_error,
            WizardStep::Import => gates.upload_disabled,
            WizardStep::Config => false,
        }
    }

    pub fn select(&mut self, target: WizardStep, gates: StepGates) -> StepChange {
        if target == self.active {
            return StepChange::Unchanged;
        }

        if self.guard == TabGuard::Strict {
            let leaving_rejected_name = self.active == WizardStep::Name && gates.title_error;
            let entering_disabled_import =
                target == WizardStep::Import && gates.upload_disabled;

            if leaving_rejected_name || entering_disabled_import {
                debug!("Step change {} -> {} refused", self.active, target);
                return StepChange::Refused;
            }
        }

        let from = self.active;
        self.active = target;
        debug!("Step changed {} -> {}", from, target);
        StepChange::Changed { from, to: target }
    }

    pub fn tabs(&self, gates: StepGates) -> Vec<StepTab> {
        WizardStep::ALL
            .iter()
            .map(|&step| StepTab {
                step,
                active: step == self.active,
                disabled: Self::is_disabled(step, gates),
            })
            .collect()
    }
}
