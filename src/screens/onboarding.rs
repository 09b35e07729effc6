use thiserror::Error;
use tracing::error;

use crate::error::StoreError;
use crate::navigation::{NavigationError, Navigator, Route};
use crate::profile::services::complete_onboarding;
use crate::profile::validation::is_valid_email;
use crate::storage::KeyValueStore;

#[derive(Error, Debug)]
pub enum OnboardingError {
    #[error("name and a valid email are required")]
    Incomplete,

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Navigation(#[from] NavigationError),
}

#[derive(Debug, Clone, Default)]
pub struct OnboardingScreen {
    pub name: String,
    pub email: String,
    alert: Option<String>,
}

impl OnboardingScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the Next button is enabled.
    pub fn can_submit(&self) -> bool {
        !self.name.trim().is_empty() && is_valid_email(self.email.trim())
    }

    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    pub async fn submit(
        &mut self,
        kv: &dyn KeyValueStore,
        nav: &mut Navigator,
    ) -> Result<Route, OnboardingError> {
        if !self.can_submit() {
            return Err(OnboardingError::Incomplete);
        }
        if let Err(e) = complete_onboarding(kv, &self.name, &self.email).await {
            error!(error = %e, "error saving onboarding status");
            self.alert = Some("Failed to save onboarding status. Please try again.".into());
            return Err(e.into());
        }
        self.alert = None;
        Ok(nav.navigate(Route::Profile)?)
    }
}
