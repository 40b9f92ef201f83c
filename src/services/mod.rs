//! Service layer for the user finder.
//!
//! This module contains the building blocks of the search pipeline:
//! - Query construction (`build_query`)
//! - Rate-limit classification (`rate_limit`)
//! - Single-request HTTP access (`SafeSearchClient`)
//! - Filtered search with fallback (`FallbackOrchestrator`)
//! - Profile fetching (`ProfileEnricher`)

mod enricher;
mod fallback;
mod query;
pub mod rate_limit;
mod safe_client;

pub use enricher::ProfileEnricher;
pub use fallback::FallbackOrchestrator;
pub use query::build_query;
pub use rate_limit::{RateLimitStatus, classify};
pub use safe_client::{DEFAULT_TIMEOUT, SafeSearchClient};
