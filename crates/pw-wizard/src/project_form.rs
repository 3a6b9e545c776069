use pw_core::ProjectBody;

/// Local fields collected across the wizard's steps.
///
/// Only the title is ever synced before commit. Any title change retracts the
/// current title error until the remote validates again.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectForm {
    title: String,
    description: String,
    label_config: String,
    title_error: Option<String>,
}

impl ProjectForm {
    pub fn new(label_config: impl Into<String>) -> Self {
        Self {
            label_config: label_config.into(),
            ..Default::default()
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn label_config(&self) -> &str {
        &self.label_config
    }

    pub fn title_error(&self) -> Option<&str> {
        self.title_error.as_deref()
    }

    pub fn has_title_error(&self) -> bool {
        self.title_error.is_some()
    }

    pub fn set_title(&mut self, value: impl Into<String>) {
        self.title = value.into();
        self.title_error = None;
    }

    /// Adopt the draft's server-side title if nothing was typed yet
    pub fn seed_title(&mut self, title: &str) -> bool {
        if !self.title.is_empty() {
            return false;
        }
        self.set_title(title);
        true
    }

    pub fn set_description(&mut self, value: impl Into<String>) {
        self.description = value.into();
    }

    pub fn set_label_config(&mut self, value: impl Into<String>) {
        self.label_config = value.into();
    }

    pub fn reject_title(&mut self, message: Option<String>) {
        self.title_error = message;
    }

    /// Commit payload built from the current fields
    pub fn body(&self) -> ProjectBody {
        ProjectBody::new(&self.title, &self.description, &self.label_config)
    }
}
