//! Utility functions and helpers.

use url::Url;

/// Parse an absolute `http`/`https` URL, rejecting anything else.
pub fn parse_http_url(raw: &str) -> Option<Url> {
    Url::parse(raw.trim())
        .ok()
        .filter(|u| matches!(u.scheme(), "http" | "https") && u.host_str().is_some())
}
