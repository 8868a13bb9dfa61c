mod claude;
mod error;
mod openai;
mod provider;

pub use claude::ClaudeClient;
pub use error::LLMError;
pub use openai::OpenAIClient;
pub use provider::Provider;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A single message in a structured chat request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Trait for Large Language Model providers.
///
/// This abstraction allows swapping between different hosted providers
/// without changing the rest of the code. Calls are synchronous
/// request/response from the caller's point of view: one await, one
/// generated text, or an error.
///
/// # Supported Providers
///
/// - **Groq** (default): OpenAI-compatible chat completions
/// - **OpenAI-compatible**: OpenAI, Azure, vLLM, OpenRouter, etc.
/// - **Anthropic**: Claude models via the Anthropic API
#[async_trait]
pub trait LLM: Send + Sync {
    /// Complete a single prompt and return the response text.
    async fn complete(&self, prompt: &str) -> Result<String, LLMError>;

    /// Complete a prompt with a system message.
    async fn complete_with_system(&self, system: &str, prompt: &str) -> Result<String, LLMError>;
}

/// Blanket implementation for shared pointers, so a single client can be
/// handed to both the reasoning loop and the document generator.
#[async_trait]
impl<T: LLM + ?Sized> LLM for std::sync::Arc<T> {
    async fn complete(&self, prompt: &str) -> Result<String, LLMError> {
        (**self).complete(prompt).await
    }

    async fn complete_with_system(&self, system: &str, prompt: &str) -> Result<String, LLMError> {
        (**self).complete_with_system(system, prompt).await
    }
}

/// Blanket implementation for boxed clients.
#[async_trait]
impl<T: LLM + ?Sized> LLM for Box<T> {
    async fn complete(&self, prompt: &str) -> Result<String, LLMError> {
        (**self).complete(prompt).await
    }

    async fn complete_with_system(&self, system: &str, prompt: &str) -> Result<String, LLMError> {
        (**self).complete_with_system(system, prompt).await
    }
}
