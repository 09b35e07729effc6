use thiserror::Error;
use tracing::{error, instrument};

use super::header::HeaderWatcher;
use crate::error::StoreError;
use crate::navigation::{NavigationError, Navigator, Route};
use crate::profile::services::{load_profile, logout, remove_avatar, save_profile};
use crate::profile::validation::{validate_profile, ProfileFieldError};
use crate::profile::{HeaderInfo, UserProfile};
use crate::state::AppState;

#[derive(Error, Debug)]
pub enum ProfileScreenError {
    #[error("profile has {} invalid field(s)", .0.len())]
    Invalid(Vec<ProfileFieldError>),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Navigation(#[from] NavigationError),
}

/// Profile editor. `form` is what the user is editing; `saved` mirrors the store.
pub struct ProfileScreen {
    state: AppState,
    pub form: UserProfile,
    saved: UserProfile,
    header: HeaderWatcher,
    message: Option<String>,
}

impl ProfileScreen {
    pub async fn mount(state: AppState) -> Self {
        let header =
            HeaderWatcher::start(state.kv.clone(), state.config.profile_poll_interval()).await;
        let mut screen = Self {
            state,
            form: UserProfile::default(),
            saved: UserProfile::default(),
            header,
            message: None,
        };
        screen.focus().await;
        screen
    }

    /// Re-reads the stored profile, dropping unsaved edits.
    pub async fn focus(&mut self) {
        match load_profile(self.state.kv.as_ref()).await {
            Ok(profile) => {
                self.saved = profile.clone();
                self.form = profile;
                self.message = None;
            }
            Err(e) => {
                error!(error = %e, "error loading profile");
                self.message = Some("Failed to load profile".into());
            }
        }
    }

    pub fn errors(&self) -> Vec<ProfileFieldError> {
        validate_profile(&self.form)
    }

    pub fn error_for(&self, field: &str) -> Option<String> {
        self.errors()
            .into_iter()
            .find(|e| e.field() == field)
            .map(|e| e.to_string())
    }

    pub fn is_dirty(&self) -> bool {
        self.form != self.saved
    }

    pub fn can_save(&self) -> bool {
        self.is_dirty() && self.errors().is_empty()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn header(&self) -> HeaderInfo {
        self.header.current()
    }

    pub fn set_avatar(&mut self, uri: Option<String>) {
        self.form.avatar = uri.filter(|u| !u.trim().is_empty());
    }

    #[instrument(skip(self))]
    pub async fn save(&mut self) -> Result<(), ProfileScreenError> {
        let errors = self.errors();
        if !errors.is_empty() {
            return Err(ProfileScreenError::Invalid(errors));
        }
        if let Err(e) = save_profile(self.state.kv.as_ref(), &self.form).await {
            error!(error = %e, "error saving profile");
            self.message = Some("Failed to save changes. Please try again.".into());
            return Err(e.into());
        }
        self.focus().await;
        self.message = Some("Changes saved".into());
        Ok(())
    }

    pub async fn discard(&mut self) {
        self.focus().await;
    }

    pub async fn remove_avatar(&mut self) -> Result<(), ProfileScreenError> {
        remove_avatar(self.state.kv.as_ref()).await?;
        self.form.avatar = None;
        self.saved.avatar = None;
        Ok(())
    }

    #[instrument(skip(self, nav))]
    pub async fn logout(&mut self, nav: &mut Navigator) -> Result<Route, ProfileScreenError> {
        logout(self.state.kv.as_ref()).await?;
        self.form = UserProfile::default();
        self.saved = UserProfile::default();
        Ok(nav.navigate(Route::Onboarding)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::services::test_support::FakeMenuSource;
    use crate::navigation::{initial_route, Shell};
    use crate::profile::keys::{ONBOARDING_KEY, USER_PHONE_KEY};
    use crate::profile::services::{complete_onboarding, is_onboarding_completed};
    use crate::storage::KeyValueStore;

    async fn onboarded_state() -> AppState {
        let state = AppState::in_memory(FakeMenuSource::serving(Vec::new()))
            .await
            .unwrap();
        complete_onboarding(state.kv.as_ref(), "Tilly", "tilly@littlelemon.com")
            .await
            .unwrap();
        state
    }

    #[tokio::test]
    async fn mount_loads_onboarding_answers() {
        let screen = ProfileScreen::mount(onboarded_state().await).await;
        assert_eq!(screen.form.first_name, "Tilly");
        assert_eq!(screen.form.email, "tilly@littlelemon.com");
        assert!(!screen.is_dirty());
        assert!(!screen.can_save());
        assert_eq!(screen.header().initials, "T");
    }

    #[tokio::test]
    async fn invalid_phone_blocks_save() {
        let state = onboarded_state().await;
        let mut screen = ProfileScreen::mount(state.clone()).await;
        screen.form.phone = "555-01".into();

        assert!(!screen.can_save());
        assert_eq!(
            screen.error_for("phone").as_deref(),
            Some("Phone number must have 10 digits")
        );
        assert!(matches!(
            screen.save().await,
            Err(ProfileScreenError::Invalid(_))
        ));
        assert_eq!(state.kv.get(USER_PHONE_KEY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn save_persists_and_discard_reverts() {
        let state = onboarded_state().await;
        let mut screen = ProfileScreen::mount(state.clone()).await;
        screen.form.last_name = "Lemon".into();
        screen.form.phone = "312 555 0199".into();
        screen.form.notifications.newsletter = true;
        screen.set_avatar(Some("file:///avatar.png".into()));
        assert!(screen.can_save());

        screen.save().await.unwrap();
        assert_eq!(screen.message(), Some("Changes saved"));
        assert!(!screen.is_dirty());
        assert_eq!(
            state.kv.get(USER_PHONE_KEY).await.unwrap().as_deref(),
            Some("312 555 0199")
        );

        screen.form.first_name = "Mario".into();
        screen.discard().await;
        assert_eq!(screen.form.first_name, "Tilly");
        assert!(screen.form.notifications.newsletter);
    }

    #[tokio::test]
    async fn remove_avatar_falls_back_to_initials() {
        let state = onboarded_state().await;
        let mut screen = ProfileScreen::mount(state.clone()).await;
        screen.set_avatar(Some("file:///avatar.png".into()));
        screen.save().await.unwrap();

        screen.remove_avatar().await.unwrap();

        let reloaded = ProfileScreen::mount(state).await;
        assert_eq!(reloaded.form.avatar, None);
        assert_eq!(reloaded.header().avatar, None);
        assert_eq!(reloaded.header().initials, "T");
    }

    #[tokio::test]
    async fn logout_returns_app_to_first_run() {
        let state = onboarded_state().await;
        let mut nav = Navigator::new(initial_route(true));
        nav.navigate(Route::Profile).unwrap();
        let mut screen = ProfileScreen::mount(state.clone()).await;

        let route = screen.logout(&mut nav).await.unwrap();

        assert_eq!(route, Route::Onboarding);
        assert_eq!(nav.history(), &[Route::Onboarding]);
        assert_eq!(state.kv.get(ONBOARDING_KEY).await.unwrap(), None);
        assert!(!is_onboarding_completed(state.kv.as_ref()).await.unwrap());
        assert_eq!(
            Shell::boot(state.kv.as_ref()).await.route(),
            Some(Route::Onboarding)
        );
    }
}
