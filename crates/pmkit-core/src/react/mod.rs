mod engine;
pub mod prompts;

pub use engine::ReactLoop;

use async_trait::async_trait;
use thiserror::Error;

use crate::llm::LLMError;
use crate::search::SearchError;
use crate::transcript::Transcript;

/// A decide-then-act control loop that produces the assistant's answer
/// for one conversational turn.
///
/// Given the session history and the new user input, an implementation
/// returns final text, possibly after zero or more tool invocations.
/// The agent treats this as a swappable collaborator behind a narrow
/// interface; it never inspects or limits what happens inside a turn.
#[async_trait]
pub trait Reasoner: Send + Sync {
    async fn respond(&self, history: &Transcript, input: &str) -> Result<String, ReasonError>;
}

/// Errors that can occur inside the reasoning loop.
///
/// Only genuine API failures surface here. A reply the loop cannot parse
/// into a valid action is not an error: it resolves to a placeholder
/// answer so a parsing hiccup never truncates the conversation.
#[derive(Debug, Error)]
pub enum ReasonError {
    #[error("LLM error: {0}")]
    Llm(#[from] LLMError),

    #[error("Search error: {0}")]
    Search(#[from] SearchError),
}
