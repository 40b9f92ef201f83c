// src/services/safe_client.rs

//! Single-request HTTP access with timeout and rate-limit classification.

use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{PipelineError, PipelineResult};
use crate::services::rate_limit::{RateLimitStatus, classify};
use crate::transport::{HttpClient, HttpRequest, HttpResponse};

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(5000);

/// Issues exactly one GET per call and turns the response into a typed
/// body or a classified [`PipelineError`].
#[derive(Clone)]
pub struct SafeSearchClient {
    client: Arc<dyn HttpClient>,
    timeout: Duration,
}

impl SafeSearchClient {
    /// Create a client with the default 5 second timeout.
    pub fn new(client: Arc<dyn HttpClient>) -> Self {
        Self::with_timeout(client, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(client: Arc<dyn HttpClient>, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// GET `url` without query parameters.
    pub async fn get<T: DeserializeOwned>(&self, url: &Url) -> PipelineResult<T> {
        self.send(HttpRequest::new(url.clone(), self.timeout)).await
    }

    /// GET `url` with one query parameter. Name and value must be non-empty.
    pub async fn get_with_param<T: DeserializeOwned>(
        &self,
        url: &Url,
        name: &str,
        value: &str,
    ) -> PipelineResult<T> {
        if name.is_empty() {
            return Err(PipelineError::invalid_input("query parameter name is empty"));
        }
        if value.is_empty() {
            return Err(PipelineError::invalid_input(format!(
                "query parameter '{name}' has an empty value"
            )));
        }
        let request = HttpRequest::new(url.clone(), self.timeout).with_query(name, value);
        self.send(request).await
    }

    async fn send<T: DeserializeOwned>(&self, request: HttpRequest) -> PipelineResult<T> {
        let url = request.url.clone();
        let response = self.client.get(request).await.inspect_err(|e| {
            log::warn!("GET {} failed: {}", url, e);
        })?;

        let rate = RateLimitStatus::from_response(&response);
        log::info!("GitHub API: {}", rate);

        Self::leave_only_success(response, &rate)
            .and_then(|body| serde_json::from_str(&body).map_err(PipelineError::decode))
    }

    fn leave_only_success(
        response: HttpResponse,
        rate: &RateLimitStatus,
    ) -> PipelineResult<String> {
        if response.status == 200 {
            log::debug!("Response successful. Body: {}", response.body);
            return Ok(response.body);
        }

        let error = classify(response.status, rate);
        match &error {
            PipelineError::RateLimited { .. } => log::warn!("GitHub API limit exceeded"),
            _ => log::warn!(
                "Returning error for response with status code: {}. Body: {}",
                response.status,
                response.body
            ),
        }
        Err(error)
    }
}
