use std::time::Duration;

use serde::Deserialize;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://little_lemon.db?mode=rwc";
pub const DEFAULT_MENU_API_URL: &str =
    "https://raw.githubusercontent.com/Meta-Mobile-Developer-PC/Working-With-Data-API/main/capstone.json";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub menu_api_url: String,
    pub search_debounce_ms: u64,
    pub profile_poll_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.into(),
            menu_api_url: DEFAULT_MENU_API_URL.into(),
            search_debounce_ms: 500,
            profile_poll_ms: 1000,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();
        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| defaults.database_url.clone());
        let menu_api_url =
            std::env::var("MENU_API_URL").unwrap_or_else(|_| defaults.menu_api_url.clone());
        if database_url.trim().is_empty() {
            anyhow::bail!("DATABASE_URL must not be empty");
        }
        Ok(Self {
            database_url,
            menu_api_url,
            search_debounce_ms: millis_var(
                "SEARCH_DEBOUNCE_MS",
                std::env::var("SEARCH_DEBOUNCE_MS").ok(),
                defaults.search_debounce_ms,
            )?,
            profile_poll_ms: millis_var(
                "PROFILE_POLL_MS",
                std::env::var("PROFILE_POLL_MS").ok(),
                defaults.profile_poll_ms,
            )?,
        })
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    pub fn profile_poll_interval(&self) -> Duration {
        Duration::from_millis(self.profile_poll_ms)
    }
}

// Unparseable values fall back to the default; zero is rejected.
fn millis_var(name: &str, raw: Option<String>, default: u64) -> anyhow::Result<u64> {
    match raw.and_then(|v| v.trim().parse::<u64>().ok()) {
        Some(0) => anyhow::bail!("{name} must be greater than zero"),
        Some(ms) => Ok(ms),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_capstone_endpoint() {
        let config = AppConfig::default();
        assert!(config.menu_api_url.ends_with("capstone.json"));
        assert_eq!(config.search_debounce(), Duration::from_millis(500));
        assert_eq!(config.profile_poll_interval(), Duration::from_secs(1));
    }

    #[test]
    fn zero_intervals_are_rejected() {
        let err = millis_var("PROFILE_POLL_MS", Some("0".into()), 1000).unwrap_err();
        assert_eq!(err.to_string(), "PROFILE_POLL_MS must be greater than zero");
        assert!(millis_var("SEARCH_DEBOUNCE_MS", Some(" 0 ".into()), 500).is_err());
    }

    #[test]
    fn intervals_parse_or_fall_back() {
        assert_eq!(millis_var("PROFILE_POLL_MS", Some("250".into()), 1000).unwrap(), 250);
        assert_eq!(millis_var("PROFILE_POLL_MS", Some("soon".into()), 1000).unwrap(), 1000);
        assert_eq!(millis_var("PROFILE_POLL_MS", None, 1000).unwrap(), 1000);
    }
}
