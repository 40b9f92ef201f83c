// src/models/mod.rs

//! Domain models for the user finder.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod config;
mod search;
mod user;

// Re-export all public types
pub use config::{Config, GithubConfig, LoggingConfig};
pub use search::{FallbackReason, SearchOutcome, SearchQuery, SearchResponse, SearchResultItem};
pub use user::{ProfileDocument, User};
