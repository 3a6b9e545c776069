use serde::{Deserialize, Serialize};

/// Snapshot of everything the wizard collected; the exact commit payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectBody {
    pub title: String,
    pub description: String,
    pub label_config: String,
}

impl ProjectBody {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        label_config: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            label_config: label_config.into(),
        }
    }
}
