// src/lib.rs

//! GitHub user finder library.
//!
//! Resolves a login fragment, optionally filtered by programming language,
//! into enriched user profiles. See [`pipeline::SearchPipeline`].

pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod transport;
pub mod utils;
