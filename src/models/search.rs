//! Search request and response structures.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A validated search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Login fragment to search for (never empty)
    pub username: String,

    /// Optional programming language filter
    pub language: Option<String>,
}

/// Body of the users search endpoint.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct SearchResponse {
    #[serde(default)]
    pub items: Vec<SearchResultItem>,
}

/// A lightweight user record from the search endpoint.
///
/// Only `url`, the API profile URL, drives enrichment. A field holding
/// anything other than a string reads as absent, so one odd item is
/// skipped instead of failing the whole search body.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
pub struct SearchResultItem {
    #[serde(default, deserialize_with = "string_or_none")]
    pub login: Option<String>,

    #[serde(default, deserialize_with = "string_or_none")]
    pub url: Option<String>,

    #[serde(default, deserialize_with = "string_or_none")]
    pub html_url: Option<String>,
}

fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_str().map(str::to_string))
}

/// Why the fallback (unfiltered) search ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    /// The language-filtered search found nobody
    EmptyResult,
    /// The language-filtered search timed out
    TimedOut,
}

/// Items produced by the search stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Items in the order the successful attempt returned them
    pub items: Vec<SearchResultItem>,

    /// Set when the items came from the fallback search
    pub fallback: Option<FallbackReason>,
}
