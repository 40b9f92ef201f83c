// src/pipeline/search.rs

//! Search-and-enrich pipeline.

use std::sync::Arc;

use crate::error::{PipelineResult, Result};
use crate::models::{GithubConfig, SearchQuery, User};
use crate::services::{FallbackOrchestrator, ProfileEnricher, SafeSearchClient};
use crate::transport::{HttpClient, ReqwestClient};

/// Entry point used by front-ends: `find_users(username, language)`.
///
/// Holds no per-call state, so one pipeline can serve concurrent calls.
/// Dropping a `find_users` future cancels its in-flight requests.
#[derive(Clone)]
pub struct SearchPipeline {
    search: FallbackOrchestrator,
    enricher: ProfileEnricher,
}

impl SearchPipeline {
    /// Build a pipeline over an injected HTTP client.
    ///
    /// Fails when `config` does not pass [`GithubConfig::validate`].
    pub fn new(client: Arc<dyn HttpClient>, config: &GithubConfig) -> Result<Self> {
        config.validate()?;
        let search_url = config.search_endpoint()?;
        let safe = SafeSearchClient::with_timeout(client, config.timeout());

        Ok(Self {
            search: FallbackOrchestrator::new(safe.clone(), search_url),
            enricher: ProfileEnricher::new(safe, config.max_concurrent),
        })
    }

    /// Build a pipeline over a `reqwest` client configured from `config`.
    pub fn from_config(config: &GithubConfig) -> Result<Self> {
        let client = ReqwestClient::from_config(config)?;
        Self::new(Arc::new(client), config)
    }

    /// Find users whose login matches `username`, preferring `language`.
    pub async fn find_users(
        &self,
        username: &str,
        language: Option<&str>,
    ) -> PipelineResult<Vec<User>> {
        let query = SearchQuery::new(username, language)?;
        log::debug!(
            "Search for users with login: {} and language: {:?}",
            query.username,
            query.language
        );

        let outcome = self.search.search(&query).await?;
        if let Some(reason) = outcome.fallback {
            log::info!(
                "Language filter dropped for '{}' ({:?})",
                query.username,
                reason
            );
        }

        let users = self.enricher.enrich(&outcome.items).await?;
        log::info!(
            "Found {} users for '{}' ({} search results)",
            users.len(),
            query.username,
            outcome.items.len()
        );
        Ok(users)
    }
}
