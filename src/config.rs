use crate::error::ConfigError;
use std::fmt;
use std::path::Path;

pub const TOKEN_VAR: &str = "NOTIFICATIONS_TELEGRAM_TOKEN";
pub const CHAT_ID_VAR: &str = "NOTIFICATIONS_TELEGRAM_TO";
pub const API_URL_VAR: &str = "NOTIFICATIONS_TELEGRAM_API_URL";

pub const DEFAULT_API_URL: &str = "https://api.telegram.org";

#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub telegram_token: String,
    pub telegram_chat_id: String,
    pub api_base_url: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("telegram_token", &"<redacted>")
            .field("telegram_chat_id", &self.telegram_chat_id)
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}

impl Config {
    /// Reads the settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_lookup)
    }

    /// Builds the config from an arbitrary key lookup.
    ///
    /// Required settings must be present; an empty value still counts as present.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let telegram_token = lookup(TOKEN_VAR).ok_or(ConfigError::MissingSetting(TOKEN_VAR))?;
        let telegram_chat_id =
            lookup(CHAT_ID_VAR).ok_or(ConfigError::MissingSetting(CHAT_ID_VAR))?;
        let api_base_url = lookup(API_URL_VAR)
            .filter(|url| !url.trim().is_empty())
            .map_or_else(
                || DEFAULT_API_URL.to_string(),
                |url| url.trim().trim_end_matches('/').to_string(),
            );

        Ok(Self {
            telegram_token,
            telegram_chat_id,
            api_base_url,
        })
    }
}

/// Key lookup backed by the process environment.
pub fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Loads a `.env` file into the process environment without overriding
/// variables that are already set.
///
/// The file only exists during local development, so any failure is ignored.
/// Must run before any other thread reads the environment.
pub fn load_dotenv(path: Option<&Path>) {
    let result = match path {
        Some(p) => dotenvy::from_path(p).map(|()| p.to_path_buf()),
        None => dotenvy::dotenv(),
    };

    match result {
        Ok(loaded) => tracing::debug!(path = %loaded.display(), "Loaded .env file"),
        Err(e) => tracing::debug!("No .env file loaded: {e}"),
    }
}
