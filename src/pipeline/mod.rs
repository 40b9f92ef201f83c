//! Pipeline entry points.
//!
//! - `SearchPipeline::find_users`: search users, then fetch their profiles

pub mod search;

pub use search::SearchPipeline;
