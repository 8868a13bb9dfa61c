use super::{ClaudeClient, LLMError, OpenAIClient, LLM};
use crate::config::{
    LLMConfig, DEFAULT_GROQ_MODEL, DEFAULT_OPENAI_MODEL, DEFAULT_OPENAI_URL,
};

/// LLM provider configuration.
#[derive(Debug, Clone)]
pub enum Provider {
    /// Groq (default, OpenAI-compatible endpoint)
    Groq {
        api_key: Option<String>,
        model: Option<String>,
    },
    /// Any OpenAI-compatible endpoint
    OpenAI {
        base_url: Option<String>,
        api_key: Option<String>,
        model: Option<String>,
    },
    /// Anthropic Claude
    Anthropic {
        api_key: Option<String>,
        model: Option<String>,
    },
}

impl Default for Provider {
    fn default() -> Self {
        Provider::Groq {
            api_key: None,
            model: None,
        }
    }
}

impl Provider {
    /// Creates a provider from LLMConfig.
    pub fn from_config(config: &LLMConfig) -> Self {
        match config.provider.as_str() {
            "anthropic" | "claude" => Provider::Anthropic {
                api_key: config.api_key_or_env(),
                model: config.model.clone(),
            },
            "openai" => Provider::OpenAI {
                base_url: config.base_url.clone(),
                api_key: config.api_key_or_env(),
                model: config.model.clone(),
            },
            "groq" => Provider::Groq {
                api_key: config.api_key_or_env(),
                model: config.model.clone(),
            },
            _ => Provider::OpenAI {
                base_url: config.base_url.clone(),
                api_key: config.api_key_or_env(),
                model: config.model.clone(),
            },
        }
    }

    /// Overrides the API key, keeping the rest of the provider settings.
    pub fn with_api_key(self, key: impl Into<String>) -> Self {
        let key = Some(key.into());
        match self {
            Provider::Groq { model, .. } => Provider::Groq {
                api_key: key,
                model,
            },
            Provider::OpenAI {
                base_url, model, ..
            } => Provider::OpenAI {
                base_url,
                api_key: key,
                model,
            },
            Provider::Anthropic { model, .. } => Provider::Anthropic {
                api_key: key,
                model,
            },
        }
    }

    /// Creates an LLM client from the provider configuration.
    ///
    /// Only the presence of a key is checked here; whether the key is
    /// actually valid is left to the first API call, matching the hosted
    /// services' own behavior.
    pub fn build(self) -> Result<Box<dyn LLM>, LLMError> {
        match self {
            Provider::Groq { api_key, model } => {
                let key = require_key(api_key)?;
                let mdl = model.unwrap_or_else(|| DEFAULT_GROQ_MODEL.to_string());
                Ok(Box::new(OpenAIClient::groq(key, mdl)))
            }

            Provider::OpenAI {
                base_url,
                api_key,
                model,
            } => {
                let key = require_key(api_key)?;
                let base = base_url.unwrap_or_else(|| DEFAULT_OPENAI_URL.to_string());
                let mdl = model.unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string());
                Ok(Box::new(OpenAIClient::new(base, key, mdl)))
            }

            Provider::Anthropic { api_key, model } => {
                let key = require_key(api_key)?;
                let mut client = ClaudeClient::new(key);
                if let Some(mdl) = model {
                    client = client.with_model(mdl);
                }
                Ok(Box::new(client))
            }
        }
    }
}

fn require_key(api_key: Option<String>) -> Result<String, LLMError> {
    match api_key {
        Some(key) if !key.trim().is_empty() => Ok(key),
        _ => Err(LLMError::MissingApiKey),
    }
}
