use std::sync::{Arc, Mutex, PoisonError};

use log::info;
use pw_core::{NavigationMode, Navigator, Route};

/// Prints the route the wizard leaves to and remembers it
#[derive(Clone, Default)]
pub struct ConsoleNavigator {
    last: Arc<Mutex<Option<(Route, NavigationMode)>>>,
}

impl ConsoleNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<(Route, NavigationMode)> {
        *self.last.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Navigator for ConsoleNavigator {
    fn navigate(&self, route: Route, mode: NavigationMode) {
        let verb = match mode {
            NavigationMode::Push => "push",
            NavigationMode::Replace => "replace",
        };
        info!("Navigating ({}) to {}", verb, route);
        println!("-> {} ({})", route, verb);
        *self.last.lock().unwrap_or_else(PoisonError::into_inner) = Some((route, mode));
    }
}
