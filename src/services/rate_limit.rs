// src/services/rate_limit.rs

//! Rate-limit aware classification of failed responses.
//!
//! GitHub signals an exhausted quota through `X-RateLimit-Remaining: 0`,
//! usually alongside a 403, so the status code alone cannot tell a rate
//! limit apart from a plain permission error.

use std::fmt;

use crate::error::PipelineError;
use crate::transport::HttpResponse;

pub const RATE_LIMIT_HEADER: &str = "X-RateLimit-Limit";
pub const RATE_REMAINING_HEADER: &str = "X-RateLimit-Remaining";

/// Quota state reported by a response. Either value may be missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RateLimitStatus {
    pub remaining: Option<u64>,
    pub limit: Option<u64>,
}

impl RateLimitStatus {
    /// Read the quota headers, ignoring missing or non-numeric values.
    pub fn from_response(response: &HttpResponse) -> Self {
        Self {
            remaining: parse_header(response, RATE_REMAINING_HEADER),
            limit: parse_header(response, RATE_LIMIT_HEADER),
        }
    }

    /// True only when the remaining quota is known to be zero.
    pub fn is_exhausted(&self) -> bool {
        self.remaining == Some(0)
    }
}

impl fmt::Display for RateLimitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let show = |v: Option<u64>| v.map_or_else(|| "?".to_string(), |v| v.to_string());
        write!(
            f,
            "{} calls left of {}",
            show(self.remaining),
            show(self.limit)
        )
    }
}

fn parse_header(response: &HttpResponse, name: &str) -> Option<u64> {
    response.header(name)?.trim().parse().ok()
}

/// Classify a non-200 response.
pub fn classify(status_code: u16, rate: &RateLimitStatus) -> PipelineError {
    if rate.is_exhausted() {
        PipelineError::RateLimited {
            limit: rate.limit.unwrap_or(0),
        }
    } else {
        PipelineError::HttpFailure { status_code }
    }
}
