//! Application configuration structures.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// GitHub API access settings
    #[serde(default)]
    pub github: GithubConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        self.github.validate()
    }
}

/// GitHub API access settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubConfig {
    /// Users search endpoint
    #[serde(default = "defaults::search_url")]
    pub search_url: String,

    /// Per-request timeout in milliseconds
    #[serde(default = "defaults::timeout_ms")]
    pub timeout_ms: u64,

    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Maximum concurrent profile requests
    #[serde(default = "defaults::max_concurrent")]
    pub max_concurrent: usize,

    /// Personal access token, sent as a bearer token when present
    #[serde(default)]
    pub token: Option<String>,
}

impl GithubConfig {
    /// Reject settings no pipeline can run with.
    pub fn validate(&self) -> Result<()> {
        if self.user_agent.trim().is_empty() {
            return Err(AppError::validation("github.user_agent is empty"));
        }
        if self.timeout_ms == 0 {
            return Err(AppError::validation("github.timeout_ms must be > 0"));
        }
        if self.max_concurrent == 0 {
            return Err(AppError::validation("github.max_concurrent must be > 0"));
        }
        self.search_endpoint()?;
        Ok(())
    }

    /// Parse the configured search endpoint.
    pub fn search_endpoint(&self) -> Result<Url> {
        let url = Url::parse(&self.search_url)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(AppError::validation(format!(
                "github.search_url must be http(s), got '{}'",
                self.search_url
            )));
        }
        Ok(url)
    }

    /// Per-request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            search_url: defaults::search_url(),
            timeout_ms: defaults::timeout_ms(),
            user_agent: defaults::user_agent(),
            max_concurrent: defaults::max_concurrent(),
            token: None,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default level filter when `RUST_LOG` is not set
    #[serde(default = "defaults::log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::log_level(),
        }
    }
}

mod defaults {
    pub fn search_url() -> String {
        "https://api.github.com/search/users".into()
    }
    pub fn timeout_ms() -> u64 {
        5000
    }
    pub fn user_agent() -> String {
        concat!("user-finder/", env!("CARGO_PKG_VERSION")).into()
    }
    pub fn max_concurrent() -> usize {
        5
    }
    pub fn log_level() -> String {
        "info".into()
    }
}
