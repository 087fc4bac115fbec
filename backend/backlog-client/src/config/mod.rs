//! Client configuration from a TOML file or the process environment.
//!
//! The API key itself is never stored in the file: `api_key_env` names the
//! environment variable that holds it, and `.env` is loaded first when present.

use crate::DEFAULT_USER_AGENT;
use crate::error::config::ConfigError;
use crate::transport::DEFAULT_TIMEOUT_DURATION;

use common::{ErrorLocation, RedactedApiKey};

use std::env;
use std::panic::Location;
use std::path::Path;
use std::time::Duration;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = "backlog.toml";
pub const DEFAULT_API_KEY_ENV: &str = "BACKLOG_API_KEY";
pub const BASE_URL_ENV: &str = "BACKLOG_BASE_URL";
pub const TIMEOUT_SECS_ENV: &str = "BACKLOG_TIMEOUT_SECS";

const MAX_TIMEOUT_SECS: u64 = 600;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Space URL, e.g. `https://example.backlog.com/`.
    pub base_url: String,

    /// Environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default)]
    pub user_agent: Option<String>,
}

fn default_api_key_env() -> String {
    DEFAULT_API_KEY_ENV.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_DURATION.as_secs()
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key_env: default_api_key_env(),
            timeout_secs: default_timeout_secs(),
            user_agent: None,
        }
    }

    /// Load `{config_dir}/backlog.toml`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file is missing or unreadable, is not
    /// valid TOML, or fails [`ClientConfig::validate`].
    pub fn load(config_dir: &Path) -> Result<Self, ConfigError> {
        Self::load_from_path(&config_dir.join(CONFIG_FILE_NAME))
    }

    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            warn!("Failed to read Backlog config {}: {}", path.display(), e);
            ConfigError::ReadError {
                location: ErrorLocation::from(Location::caller()),
                path: path.to_path_buf(),
                source: e,
            }
        })?;

        let config: ClientConfig = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            location: ErrorLocation::from(Location::caller()),
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.validate()?;

        info!("Backlog config loaded from {}", path.display());
        Ok(config)
    }

    /// Build a config from `BACKLOG_BASE_URL` and `BACKLOG_TIMEOUT_SECS`,
    /// loading `.env` from the working directory first if one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        try_load_dotenv();

        let base_url = env::var(BASE_URL_ENV).map_err(|_| ConfigError::MissingEnv {
            location: ErrorLocation::from(Location::caller()),
            name: BASE_URL_ENV.to_string(),
        })?;

        let mut config = Self::new(base_url);
        if let Ok(raw) = env::var(TIMEOUT_SECS_ENV) {
            config.timeout_secs = raw.trim().parse().map_err(|_| ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!("{TIMEOUT_SECS_ENV} must be a whole number of seconds, got '{raw}'"),
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Read the API key from the variable named by `api_key_env`.
    pub fn resolve_api_key(&self) -> Result<RedactedApiKey, ConfigError> {
        try_load_dotenv();

        let key = env::var(&self.api_key_env)
            .ok()
            .map(RedactedApiKey::new)
            .filter(|key| !key.is_blank())
            .map(|key| RedactedApiKey::new(key.as_str().trim()));

        match key {
            Some(key) => {
                debug!("Backlog API key read from {} ({} chars)", self.api_key_env, key.len());
                Ok(key)
            }
            None => Err(ConfigError::MissingEnv {
                location: ErrorLocation::from(Location::caller()),
                name: self.api_key_env.clone(),
            }),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn user_agent(&self) -> &str {
        self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT)
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: "base_url cannot be empty".to_string(),
            });
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!("Invalid base_url format: {}", self.base_url),
            });
        }

        if self.api_key_env.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: "api_key_env cannot be empty".to_string(),
            });
        }

        if self.timeout_secs == 0 || self.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!(
                    "Invalid timeout_secs: {} (must be 1-{MAX_TIMEOUT_SECS})",
                    self.timeout_secs
                ),
            });
        }

        Ok(())
    }
}

/// Non-fatal: a missing `.env` just means the process environment is used as is.
fn try_load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => debug!("Loaded .env from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => warn!("Ignoring unreadable .env: {}", e),
    }
}
