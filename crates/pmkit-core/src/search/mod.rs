mod tavily;

pub use tavily::TavilyClient;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single ranked web search result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    pub url: String,
    pub snippet: String,
}

/// Trait for web search providers.
///
/// The reasoning loop invokes this mid-turn when the model decides it
/// needs current information. Implementations are synchronous
/// request/response: one query in, an ordered result list out.
#[async_trait]
pub trait SearchTool: Send + Sync {
    /// Tool name as exposed to the reasoning loop.
    fn name(&self) -> &str;

    /// One-line tool description for the reasoning prompt.
    fn description(&self) -> &str;

    /// Runs a search, returning up to `max_results` ranked results.
    async fn search(
        &self,
        query: &str,
        max_results: u32,
    ) -> Result<Vec<SearchResult>, SearchError>;
}

/// Blanket implementation for boxed trait objects.
#[async_trait]
impl SearchTool for Box<dyn SearchTool> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn description(&self) -> &str {
        (**self).description()
    }

    async fn search(
        &self,
        query: &str,
        max_results: u32,
    ) -> Result<Vec<SearchResult>, SearchError> {
        (**self).search(query, max_results).await
    }
}

/// Errors that can occur during search operations.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Missing API key. Provide one or set the SEARCH_API_KEY environment variable.")]
    MissingApiKey,

    #[error("API returned error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Rate limited. Try again later.")]
    RateLimited,

    #[error("Network error: {0}")]
    Network(String),
}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        SearchError::Network(err.to_string())
    }
}
