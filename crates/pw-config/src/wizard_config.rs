use crate::{ConfigError, ConfigErrorResult, DEFAULT_STRICT_TAB_GUARD};

use pw_core::{DEFAULT_DRAFT_TITLE_PREFIX, DEFAULT_LABEL_CONFIG};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WizardConfig {
    /// Enforce disabled step tabs instead of only marking them
    pub strict_tab_guard: bool,
    /// Label config a new wizard starts with
    pub default_label_config: String,
    /// Prefix for generated draft titles
    pub draft_title_prefix: String,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            strict_tab_guard: DEFAULT_STRICT_TAB_GUARD,
            default_label_config: String::from(DEFAULT_LABEL_CONFIG),
            draft_title_prefix: String::from(DEFAULT_DRAFT_TITLE_PREFIX),
        }
    }
}

impl WizardConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.default_label_config.trim().is_empty() {
            return Err(ConfigError::wizard(
                "wizard.default_label_config cannot be empty",
            ));
        }

        if self.draft_title_prefix.trim().is_empty() {
            return Err(ConfigError::wizard(
                "wizard.draft_title_prefix cannot be empty",
            ));
        }

        Ok(())
    }
}
