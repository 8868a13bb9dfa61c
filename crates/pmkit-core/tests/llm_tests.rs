use pmkit_core::config::LLMConfig;
use pmkit_core::llm::Provider;
use pmkit_core::{ClaudeClient, LLMError, OpenAIClient};

// OpenAI-compatible client tests
mod openai {
    use super::*;

    #[test]
    fn test_client_creation() {
        let _client = OpenAIClient::new("https://api.example.com/v1", "test-key", "gpt-4");
    }

    #[test]
    fn test_groq_client() {
        let _client = OpenAIClient::groq("test-key", "llama-3.3-70b-versatile");
    }

    #[test]
    fn test_openai_client() {
        let _client = OpenAIClient::openai("test-key", "gpt-4o");
    }

    #[test]
    fn test_builder_chain() {
        let _client = OpenAIClient::groq("key", "model")
            .with_max_tokens(2048)
            .with_temperature(0.2);
    }
}

// Claude client tests
mod claude {
    use super::*;

    #[test]
    fn test_client_creation() {
        let _client = ClaudeClient::new("test-key");
    }

    #[test]
    fn test_client_with_model() {
        let _client = ClaudeClient::new("test-key").with_model("claude-3-opus");
    }

    #[test]
    fn test_client_with_api_url() {
        let _client =
            ClaudeClient::new("test-key").with_api_url("https://proxy.example.com/v1/messages");
    }
}

// Provider tests
mod provider {
    use super::*;

    #[test]
    fn test_default_provider() {
        let provider = Provider::default();
        assert!(matches!(provider, Provider::Groq { .. }));
    }

    #[test]
    fn test_build_requires_key() {
        let provider = Provider::Groq {
            api_key: None,
            model: None,
        };
        assert!(matches!(provider.build(), Err(LLMError::MissingApiKey)));
    }

    #[test]
    fn test_build_with_key() {
        let provider = Provider::OpenAI {
            base_url: Some("http://localhost:8080/v1".to_string()),
            api_key: Some("test".to_string()),
            model: Some("local-model".to_string()),
        };
        assert!(provider.build().is_ok());
    }

    #[test]
    fn test_from_config() {
        let config = LLMConfig {
            provider: "anthropic".to_string(),
            model: Some("claude-3-haiku".to_string()),
            api_key: Some("k".to_string()),
            ..LLMConfig::default()
        };

        let provider = Provider::from_config(&config);
        assert!(matches!(
            provider,
            Provider::Anthropic { model: Some(ref m), .. } if m == "claude-3-haiku"
        ));
    }

    #[test]
    fn test_api_key_override() {
        let config = LLMConfig {
            api_key: Some("from-config".to_string()),
            ..LLMConfig::default()
        };

        let provider = Provider::from_config(&config).with_api_key("from-user");
        assert!(matches!(
            provider,
            Provider::Groq { api_key: Some(ref k), .. } if k == "from-user"
        ));
    }
}
