use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Wizard phase. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    /// Title and description
    #[default]
    Name,
    /// Data import
    Import,
    /// Label schema authoring
    Config,
}

impl WizardStep {
    /// All steps in tab order
    pub const ALL: [WizardStep; 3] = [Self::Name, Self::Import, Self::Config];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Import => "import",
            Self::Config => "config",
        }
    }

    /// Tab caption
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Project Name",
            Self::Import => "Data Import",
            Self::Config => "Labeling Setup",
        }
    }
}

impl FromStr for WizardStep {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "name" => Ok(Self::Name),
            "import" => Ok(Self::Import),
            "config" => Ok(Self::Config),
            _ => Err(CoreError::InvalidWizardStep {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
