pub mod header;
pub mod home;
pub mod onboarding;
pub mod profile;

pub use header::HeaderWatcher;
pub use home::{HomeScreen, HomeStatus, MenuRow};
pub use onboarding::OnboardingScreen;
pub use profile::ProfileScreen;
