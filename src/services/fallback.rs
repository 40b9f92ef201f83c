// src/services/fallback.rs

//! Language-filtered user search with a single unfiltered fallback.

use url::Url;

use crate::error::{PipelineError, PipelineResult};
use crate::models::{FallbackReason, SearchOutcome, SearchQuery, SearchResponse, SearchResultItem};
use crate::services::SafeSearchClient;

const QUERY_PARAM: &str = "q";

/// Runs the search stage of the pipeline.
///
/// At most two requests are issued per call: the filtered search and, when
/// it comes back empty or times out, one search without the language term.
#[derive(Clone)]
pub struct FallbackOrchestrator {
    client: SafeSearchClient,
    search_url: Url,
}

impl FallbackOrchestrator {
    pub fn new(client: SafeSearchClient, search_url: Url) -> Self {
        Self { client, search_url }
    }

    /// Search for `query`, falling back to the unfiltered query if needed.
    pub async fn search(&self, query: &SearchQuery) -> PipelineResult<SearchOutcome> {
        if query.language.is_none() {
            let items = self.search_once(query).await?;
            return Ok(SearchOutcome {
                items,
                fallback: None,
            });
        }

        let reason = match self.search_once(query).await {
            Ok(items) if !items.is_empty() => {
                return Ok(SearchOutcome {
                    items,
                    fallback: None,
                });
            }
            Ok(_) => FallbackReason::EmptyResult,
            Err(PipelineError::Timeout) => {
                log::info!("Request timed out - treating it as empty");
                FallbackReason::TimedOut
            }
            Err(error) => return Err(error),
        };

        let broad = query.without_language();
        log::debug!(
            "Search users by username only: {} ({:?})",
            broad.username,
            reason
        );
        let items = self.search_once(&broad).await?;
        Ok(SearchOutcome {
            items,
            fallback: Some(reason),
        })
    }

    async fn search_once(&self, query: &SearchQuery) -> PipelineResult<Vec<SearchResultItem>> {
        let response: SearchResponse = self
            .client
            .get_with_param(&self.search_url, QUERY_PARAM, &query.to_query_string())
            .await?;
        log::debug!(
            "Search '{}' returned {} items",
            query.to_query_string(),
            response.items.len()
        );
        Ok(response.items)
    }
}
