use crate::ProjectId;

/// Navigation targets the wizard can exit to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Project listing (`/projects`)
    ProjectList,
    /// Data view of a committed project (`/projects/{id}/data`)
    ProjectData(ProjectId),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Self::ProjectList => String::from("/projects"),
            Self::ProjectData(id) => format!("/projects/{}/data", id),
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// How a navigation affects history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavigationMode {
    /// Add a history entry
    Push,
    /// Replace the current entry so the wizard cannot be navigated back into
    Replace,
}
