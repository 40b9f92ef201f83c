//! HTTP transport abstraction.
//!
//! The pipeline never talks to `reqwest` directly. It drives an injected
//! [`HttpClient`], so tests can script responses and a front-end can share
//! one connection pool across concurrent `find_users` calls.

pub mod http;

#[cfg(test)]
pub(crate) mod fake;

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use crate::error::PipelineResult;

// Re-export for convenience
pub use http::{ReqwestClient, create_async_client};

/// A single GET request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: Url,
    /// Optional `(name, value)` query parameter, unencoded
    pub query: Option<(String, String)>,
    pub timeout: Duration,
}

impl HttpRequest {
    pub fn new(url: Url, timeout: Duration) -> Self {
        Self {
            url,
            query: None,
            timeout,
        }
    }

    pub fn with_query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query = Some((name.into(), value.into()));
        self
    }

    /// Value of the query parameter if its name matches.
    pub fn query_value(&self, name: &str) -> Option<&str> {
        self.query
            .as_ref()
            .filter(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// A fully received response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    /// Header names are stored lowercase
    headers: HashMap<String, String>,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body: body.into(),
        }
    }

    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.insert_header(name, value);
        self
    }

    pub fn insert_header(&mut self, name: &str, value: impl Into<String>) {
        self.headers.insert(name.to_ascii_lowercase(), value.into());
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }
}

/// Issues GET requests on behalf of the pipeline.
///
/// Implementations must be safe to share between concurrent requests and
/// must report an elapsed per-request timeout as `PipelineError::Timeout`.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Send the request and return the response whatever its status.
    async fn get(&self, request: HttpRequest) -> PipelineResult<HttpResponse>;
}
