//! Configuration module for loading environment variables and settings.

use crate::error::ConfigError;
use std::fmt;

/// Environment variable holding the Ark bearer credential.
pub const API_KEY_VAR: &str = "DOUBAO_API_KEY";

/// Environment variable overriding the Ark API base URL.
pub const BASE_URL_VAR: &str = "ARK_BASE_URL";

/// Default Ark API base URL (Beijing region).
pub const DEFAULT_BASE_URL: &str = "https://ark.cn-beijing.volces.com/api/v3";

/// Application configuration loaded from environment variables.
#[derive(Clone)]
pub struct Config {
    /// Bearer credential for the Ark API. Checked per tool invocation, so the
    /// server can start without it.
    pub api_key: Option<String>,
    /// Base URL of the Ark API, without a trailing slash
    pub base_url: String,
}

impl Config {
    /// Load configuration from environment variables and .env file.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidValue` if ARK_BASE_URL is not an http(s) URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// `from_env` delegates here; tests pass a map-backed closure instead of
    /// mutating the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());

        let base_url = match lookup(BASE_URL_VAR) {
            Some(url) => normalize_base_url(&url)?,
            None => DEFAULT_BASE_URL.to_string(),
        };

        Ok(Self { api_key, base_url })
    }

    /// Create a configuration with an explicit credential and base URL.
    pub fn new(api_key: Option<String>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Get the API credential.
    ///
    /// # Errors
    /// Returns `ConfigError::MissingEnvVar` if no credential is configured.
    pub fn api_key(&self) -> Result<&str, ConfigError> {
        self.api_key
            .as_deref()
            .ok_or_else(|| ConfigError::missing_env_var(API_KEY_VAR))
    }

    /// Endpoint for creating content generation tasks.
    pub fn tasks_endpoint(&self) -> String {
        format!("{}/contents/generations/tasks", self.base_url)
    }

    /// Endpoint for querying a single content generation task.
    pub fn task_endpoint(&self, task_id: &str) -> String {
        format!("{}/{}", self.tasks_endpoint(), urlencoding::encode(task_id))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

// The credential never shows up in logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .finish()
    }
}

fn normalize_base_url(url: &str) -> Result<String, ConfigError> {
    let url = url.trim().trim_end_matches('/');
    if !(url.starts_with("https://") || url.starts_with("http://")) {
        return Err(ConfigError::invalid_value(
            BASE_URL_VAR,
            format!("expected an http(s) URL, got '{}'", url),
        ));
    }
    Ok(url.to_string())
}
