use crate::{NavigationMode, Route};

/// Where the wizard goes when it exits
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route, mode: NavigationMode);
}
