// src/error.rs

//! Unified error handling for the user finder.

use std::fmt;

use thiserror::Error;

/// Result type alias for application-level operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Result type alias for search pipeline operations.
pub type PipelineResult<T> = std::result::Result<T, PipelineError>;

/// Failure of a single `find_users` invocation.
///
/// Only `Timeout` on the initial language-filtered search is ever recovered
/// (by the fallback search); every other variant reaches the caller as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    /// The remote API quota is exhausted
    #[error("GitHub API limit reached. Allowed number of calls: {limit}")]
    RateLimited { limit: u64 },

    /// A single request exceeded its timeout
    #[error("Request timed out")]
    Timeout,

    /// Non-200 response that is not a rate limit
    #[error("HTTP request failed with status {status_code}")]
    HttpFailure { status_code: u16 },

    /// Caller supplied an empty or missing value
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    /// Connection-level failure other than a timeout
    #[error("Transport error: {0}")]
    Transport(String),

    /// A 200 response whose body was not the expected JSON
    #[error("Failed to decode response body: {0}")]
    Decode(String),
}

impl PipelineError {
    /// Create an invalid input error.
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Create a decode error.
    pub fn decode(message: impl fmt::Display) -> Self {
        Self::Decode(message.to_string())
    }

    /// Whether the caller may succeed by waiting and trying again.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited { .. })
    }

    /// Status code an HTTP front-end answers with for this error.
    ///
    /// Rate limiting maps to 403, everything else to 404.
    pub fn http_status(&self) -> u16 {
        match self {
            Self::RateLimited { .. } => 403,
            _ => 404,
        }
    }
}

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP client could not be built
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Search pipeline failed
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
}

impl AppError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}
