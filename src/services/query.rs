// src/services/query.rs

//! Search query construction.

use crate::error::{PipelineError, PipelineResult};
use crate::models::SearchQuery;

impl SearchQuery {
    /// Validate the username and normalize an empty language to none.
    pub fn new(username: &str, language: Option<&str>) -> PipelineResult<Self> {
        let username = username.trim();
        if username.is_empty() {
            return Err(PipelineError::invalid_input("username should be provided"));
        }
        let language = language
            .map(str::trim)
            .filter(|lang| !lang.is_empty())
            .map(str::to_string);

        Ok(Self {
            username: username.to_string(),
            language,
        })
    }

    /// The same username without the language filter.
    pub fn without_language(&self) -> Self {
        Self {
            username: self.username.clone(),
            language: None,
        }
    }

    /// Render the `q` parameter value.
    ///
    /// Terms are joined with plain spaces and left unencoded; the transport
    /// encodes the whole value exactly once.
    pub fn to_query_string(&self) -> String {
        let mut query = format!("{} type:user in:login", self.username);
        if let Some(language) = &self.language {
            query.push_str(" language:");
            query.push_str(language);
        }
        query
    }
}

/// Build the users search query for `username`, optionally restricted to `language`.
pub fn build_query(username: &str, language: Option<&str>) -> PipelineResult<String> {
    let query = SearchQuery::new(username, language)?;
    log::debug!("Query: {}", query.to_query_string());
    Ok(query.to_query_string())
}
