// src/services/enricher.rs

//! Profile enrichment service.
//!
//! Fetches the full profile behind each search result concurrently while
//! keeping the search order in the output.

use futures::stream::{self, StreamExt, TryStreamExt};
use url::Url;

use crate::error::PipelineResult;
use crate::models::{ProfileDocument, SearchResultItem, User};
use crate::services::SafeSearchClient;
use crate::utils::parse_http_url;

/// Turns search result items into [`User`] records.
#[derive(Clone)]
pub struct ProfileEnricher {
    client: SafeSearchClient,
    concurrency: usize,
}

impl ProfileEnricher {
    pub fn new(client: SafeSearchClient, concurrency: usize) -> Self {
        Self {
            client,
            concurrency: concurrency.max(1),
        }
    }

    /// Fetch profiles for `items`, skipping items without a usable URL.
    ///
    /// At most `concurrency` fetches run at once. Results are consumed in
    /// search order, so the first failure in that order fails the whole
    /// batch and drops the fetches still in flight. A failure queued behind
    /// a slower item surfaces once that item has answered.
    pub async fn enrich(&self, items: &[SearchResultItem]) -> PipelineResult<Vec<User>> {
        let urls: Vec<Url> = items.iter().filter_map(Self::profile_url).collect();

        stream::iter(urls)
            .map(|url| async move { self.fetch_user(&url).await })
            .buffered(self.concurrency)
            .try_collect()
            .await
    }

    async fn fetch_user(&self, url: &Url) -> PipelineResult<User> {
        log::debug!("Requesting user information by profile URL: {}", url);
        let profile: ProfileDocument = self.client.get(url).await?;
        Ok(User::from(profile))
    }

    fn profile_url(item: &SearchResultItem) -> Option<Url> {
        let raw = item.url.as_deref().unwrap_or_default();
        let url = parse_http_url(raw);
        if url.is_none() {
            log::warn!(
                "Skipping malformed URL: '{}' (login: {})",
                raw,
                item.login.as_deref().unwrap_or("?")
            );
        }
        url
    }
}
