use crate::TabGuard;

use pw_config::WizardConfig;
use pw_core::DEFAULT_LABEL_CONFIG;

#[derive(Debug, Clone)]
pub struct WizardSettings {
    pub tab_guard: TabGuard,
    pub default_label_config: String,
}

impl Default for WizardSettings {
    fn default() -> Self {
        Self {
            tab_guard: TabGuard::Advisory,
            default_label_config: String::from(DEFAULT_LABEL_CONFIG),
        }
    }
}

impl From<&WizardConfig> for WizardSettings {
    fn from(config: &WizardConfig) -> Self {
        Self {
            tab_guard: if config.strict_tab_guard {
                TabGuard::Strict
            } else {
                TabGuard::Advisory
            },
            default_label_config: config.default_label_config.clone(),
        }
    }
}
