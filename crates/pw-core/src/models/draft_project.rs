//! Draft project - the server-side record the wizard configures before commit.

use serde::{Deserialize, Deserializer, Serialize};

/// Server-assigned project identifier
pub type ProjectId = u64;

/// A project created early so in-progress work is addressable and cancelable.
///
/// Only `title` is synced while the wizard is open; `description` and
/// `label_config` live in the wizard until the commit update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftProject {
    pub id: ProjectId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub label_config: String,
}

impl DraftProject {
    pub fn new(id: ProjectId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: String::new(),
            label_config: String::new(),
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
