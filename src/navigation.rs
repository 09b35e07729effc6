use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error};

use crate::profile::services::is_onboarding_completed;
use crate::storage::KeyValueStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Route {
    Onboarding,
    Home,
    Profile,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationError {
    #[error("cannot navigate from {from:?} to {to:?}")]
    NotAllowed { from: Route, to: Route },

    #[error("nothing to go back to")]
    NoHistory,
}

pub fn initial_route(onboarding_completed: bool) -> Route {
    if onboarding_completed {
        Route::Home
    } else {
        Route::Onboarding
    }
}

fn allowed(from: Route, to: Route) -> bool {
    matches!(
        (from, to),
        (Route::Onboarding, Route::Profile)
            | (Route::Home, Route::Profile)
            | (Route::Profile, Route::Home)
            | (Route::Profile, Route::Onboarding)
    )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Navigator {
    pub fn new(initial: Route) -> Self {
        Self {
            stack: vec![initial],
        }
    }

    pub fn current(&self) -> Route {
        self.stack.last().copied().unwrap_or(Route::Onboarding)
    }

    pub fn history(&self) -> &[Route] {
        &self.stack
    }

    pub fn navigate(&mut self, to: Route) -> Result<Route, NavigationError> {
        let from = self.current();
        if !allowed(from, to) {
            return Err(NavigationError::NotAllowed { from, to });
        }
        if to == Route::Onboarding {
            // Logout: nothing behind the onboarding screen.
            self.stack.clear();
        }
        self.stack.push(to);
        debug!(?from, ?to, "navigated");
        Ok(to)
    }

    pub fn back(&mut self) -> Result<Route, NavigationError> {
        if self.stack.len() < 2 {
            return Err(NavigationError::NoHistory);
        }
        self.stack.pop();
        Ok(self.current())
    }
}

/// Top-level state of the app: the splash while the flag is read, then the
/// navigator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shell {
    Loading,
    Ready(Navigator),
}

impl Shell {
    /// Reads the onboarding flag once. A failed read starts at onboarding.
    pub async fn boot(kv: &dyn KeyValueStore) -> Self {
        let completed = is_onboarding_completed(kv).await.unwrap_or_else(|e| {
            error!(error = %e, "error reading onboarding status");
            false
        });
        Shell::Ready(Navigator::new(initial_route(completed)))
    }

    pub fn route(&self) -> Option<Route> {
        match self {
            Shell::Loading => None,
            Shell::Ready(nav) => Some(nav.current()),
        }
    }
}
