use serde::{Deserialize, Serialize};

/// Field-level validation messages returned for a rejected title update
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleErrors {
    #[serde(default)]
    pub title: Option<String>,
}

/// Outcome of a title-only autosave
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleUpdate {
    pub ok: bool,
    #[serde(default)]
    pub errors: Option<TitleErrors>,
}

impl TitleUpdate {
    pub fn accepted() -> Self {
        Self {
            ok: true,
            errors: None,
        }
    }

    pub fn rejected(title: Option<String>) -> Self {
        Self {
            ok: false,
            errors: Some(TitleErrors { title }),
        }
    }

    /// Message for the title field, only meaningful when `ok` is false
    pub fn title_error(&self) -> Option<&str> {
        if self.ok {
            return None;
        }
        self.errors.as_ref().and_then(|e| e.title.as_deref())
    }
}
