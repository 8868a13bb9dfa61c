#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use pmkit_core::llm::{LLMError, LLM};
use pmkit_core::search::{SearchError, SearchResult, SearchTool};

/// A scripted model client. Replies are consumed in order; every prompt
/// received is recorded for assertions. Running out of replies surfaces
/// as a request failure, which doubles as the "API went down" case.
pub struct MockLLM {
    replies: Mutex<VecDeque<String>>,
    prompts: Mutex<Vec<String>>,
}

impl MockLLM {
    pub fn new(replies: &[&str]) -> Self {
        Self {
            replies: Mutex::new(replies.iter().map(|s| s.to_string()).collect()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// A client whose every call fails, for runtime-error tests.
    pub fn failing() -> Self {
        Self::new(&[])
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn prompt(&self, index: usize) -> String {
        self.prompts.lock().unwrap()[index].clone()
    }

    fn next_reply(&self, prompt: &str) -> Result<String, LLMError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| LLMError::RequestFailed("mock: no replies left".to_string()))
    }
}

#[async_trait]
impl LLM for MockLLM {
    async fn complete(&self, prompt: &str) -> Result<String, LLMError> {
        self.next_reply(prompt)
    }

    async fn complete_with_system(&self, _system: &str, prompt: &str) -> Result<String, LLMError> {
        self.next_reply(prompt)
    }
}

/// A canned search tool that records every query.
///
/// The query log is shared so tests can keep a handle to it after the
/// tool itself has been moved into the agent.
pub struct MockSearch {
    results: Vec<SearchResult>,
    queries: std::sync::Arc<Mutex<Vec<String>>>,
}

impl MockSearch {
    pub fn new() -> Self {
        Self {
            results: vec![SearchResult {
                title: "Example result".to_string(),
                url: "https://example.com".to_string(),
                snippet: "An example snippet.".to_string(),
            }],
            queries: std::sync::Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_results(results: Vec<SearchResult>) -> Self {
        Self {
            results,
            queries: std::sync::Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn query_log(&self) -> std::sync::Arc<Mutex<Vec<String>>> {
        self.queries.clone()
    }
}

#[async_trait]
impl SearchTool for MockSearch {
    fn name(&self) -> &str {
        "web_search"
    }

    fn description(&self) -> &str {
        "Searches the web for current information."
    }

    async fn search(
        &self,
        query: &str,
        _max_results: u32,
    ) -> Result<Vec<SearchResult>, SearchError> {
        self.queries.lock().unwrap().push(query.to_string());
        Ok(self.results.clone())
    }
}
