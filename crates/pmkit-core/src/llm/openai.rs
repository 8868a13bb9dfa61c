use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{ChatMessage, LLMError, LLM};
use crate::config::{
    DEFAULT_GROQ_URL, DEFAULT_MAX_TOKENS, DEFAULT_OPENAI_URL, DEFAULT_TEMPERATURE,
};

/// OpenAI-compatible API client.
///
/// Works with any provider that implements the OpenAI chat completions API:
/// - Groq (the default provider for pmkit)
/// - OpenAI
/// - Azure OpenAI
/// - vLLM
/// - OpenRouter
/// - And many more
pub struct OpenAIClient {
    api_key: String,
    base_url: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
    client: Client,
}

impl OpenAIClient {
    /// Creates a new OpenAI-compatible client.
    ///
    /// # Arguments
    /// * `base_url` - The API base URL (e.g., "https://api.groq.com/openai/v1")
    /// * `api_key` - The API key
    /// * `model` - The model name (e.g., "llama-3.3-70b-versatile", "gpt-4o")
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            model: model.into(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            client: Client::new(),
        }
    }

    /// Creates a client for Groq.
    pub fn groq(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self::new(DEFAULT_GROQ_URL, api_key, model)
    }

    /// Creates a client for OpenAI.
    pub fn openai(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self::new(DEFAULT_OPENAI_URL, api_key, model)
    }

    /// Sets the maximum tokens for responses.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Sets the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    async fn send_request(
        &self,
        messages: Vec<ChatMessage>,
        system: Option<&str>,
    ) -> Result<String, LLMError> {
        let mut all_messages = Vec::new();

        if let Some(sys) = system {
            all_messages.push(ChatMessage::system(sys));
        }

        all_messages.extend(messages);

        let request = ChatRequest {
            model: self.model.clone(),
            messages: all_messages,
            max_tokens: Some(self.max_tokens),
            temperature: Some(self.temperature),
        };

        let url = format!("{}/chat/completions", self.base_url);

        tracing::debug!(model = %self.model, url = %url, "sending chat completion request");

        let mut req = self
            .client
            .post(&url)
            .header("content-type", "application/json");

        // Only add authorization if api_key is not empty
        if !self.api_key.is_empty() {
            req = req.header("authorization", format!("Bearer {}", self.api_key));
        }

        let response = req.json(&request).send().await?;

        let status = response.status();

        if status == 429 {
            return Err(LLMError::RateLimited);
        }

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(LLMError::ApiError {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| LLMError::ParseError(e.to_string()))?;

        // Extract content from first choice
        let content = chat_response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .unwrap_or_default();

        Ok(content)
    }
}

#[async_trait]
impl LLM for OpenAIClient {
    async fn complete(&self, prompt: &str) -> Result<String, LLMError> {
        self.send_request(vec![ChatMessage::user(prompt)], None).await
    }

    async fn complete_with_system(&self, system: &str, prompt: &str) -> Result<String, LLMError> {
        self.send_request(vec![ChatMessage::user(prompt)], Some(system))
            .await
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChatMessage,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = OpenAIClient::new("https://api.example.com/v1", "test-key", "gpt-4");
        assert_eq!(client.base_url, "https://api.example.com/v1");
        assert_eq!(client.model, "gpt-4");
    }

    #[test]
    fn test_groq_client() {
        let client = OpenAIClient::groq("test-key", "llama-3.3-70b-versatile");
        assert_eq!(client.base_url, DEFAULT_GROQ_URL);
        assert_eq!(client.model, "llama-3.3-70b-versatile");
        assert_eq!(client.temperature, DEFAULT_TEMPERATURE);
    }

    #[test]
    fn test_openai_client() {
        let client = OpenAIClient::openai("test-key", "gpt-4o");
        assert_eq!(client.base_url, "https://api.openai.com/v1");
        assert_eq!(client.model, "gpt-4o");
    }

    #[test]
    fn test_with_temperature() {
        let client = OpenAIClient::groq("key", "model").with_temperature(0.7);
        assert_eq!(client.temperature, 0.7);
    }

    #[test]
    fn test_url_trailing_slash_removed() {
        let client = OpenAIClient::new("https://api.example.com/v1/", "key", "model");
        assert_eq!(client.base_url, "https://api.example.com/v1");
    }
}
