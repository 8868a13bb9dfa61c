//! Configuration management for pmkit.
//!
//! Configuration is loaded from multiple sources with the following priority:
//! 1. Environment variables (highest priority)
//! 2. Project-local `pmkit.toml` file
//! 3. User config `~/.config/pmkit/config.toml`
//! 4. Built-in defaults (lowest priority)

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

mod defaults;

pub use defaults::*;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// LLM provider configuration.
    pub llm: LLMConfig,

    /// Web search configuration.
    pub search: SearchConfig,

    /// Agent behavior configuration.
    pub agent: AgentConfig,
}

impl Config {
    /// Load configuration from default locations.
    ///
    /// Searches for config in order:
    /// 1. `./pmkit.toml` (project local)
    /// 2. `~/.config/pmkit/config.toml` (user config)
    /// 3. Falls back to defaults
    pub fn load() -> Result<Self, ConfigError> {
        if Path::new("pmkit.toml").exists() {
            return Self::from_file("pmkit.toml");
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("pmkit").join("config.toml");
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        let mut config = Self::default();
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load configuration from a specific file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)?;

        config.apply_env_overrides();

        Ok(config)
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        // Credentials use the functional names, not provider-branded ones
        if let Ok(key) = std::env::var("MODEL_API_KEY") {
            self.llm.api_key = Some(key);
        }
        if let Ok(key) = std::env::var("SEARCH_API_KEY") {
            self.search.api_key = Some(key);
        }

        // LLM overrides
        if let Ok(provider) = std::env::var("PMKIT_LLM_PROVIDER") {
            self.llm.provider = provider;
        }
        if let Ok(model) = std::env::var("PMKIT_LLM_MODEL") {
            self.llm.model = Some(model);
        }
        if let Ok(url) = std::env::var("PMKIT_LLM_BASE_URL") {
            self.llm.base_url = Some(url);
        }
        if let Ok(tokens) = std::env::var("PMKIT_MAX_TOKENS") {
            if let Ok(n) = tokens.parse() {
                self.llm.max_tokens = n;
            }
        }

        // Search overrides
        if let Ok(count) = std::env::var("PMKIT_SEARCH_MAX_RESULTS") {
            if let Ok(n) = count.parse() {
                self.search.max_results = n;
            }
        }
    }

    /// Create a default config file content as a string.
    pub fn default_config_string() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

/// LLM provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LLMConfig {
    /// Provider name: "groq", "openai", or "anthropic".
    pub provider: String,

    /// Model name (provider-specific).
    pub model: Option<String>,

    /// Base URL for API (for OpenAI-compatible providers).
    pub base_url: Option<String>,

    /// API key (can also be set via the MODEL_API_KEY environment variable).
    #[serde(skip_serializing)]
    pub api_key: Option<String>,

    /// Maximum tokens for response.
    pub max_tokens: u32,

    /// Sampling temperature.
    pub temperature: f32,

    /// API version (for Anthropic).
    pub api_version: Option<String>,
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            provider: DEFAULT_LLM_PROVIDER.to_string(),
            model: None,     // Use provider default
            base_url: None,  // Use provider default
            api_key: None,   // Load from env
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            api_version: Some(DEFAULT_ANTHROPIC_API_VERSION.to_string()),
        }
    }
}

impl LLMConfig {
    /// Get the model name, falling back to provider defaults.
    pub fn model_or_default(&self) -> String {
        self.model.clone().unwrap_or_else(|| {
            match self.provider.as_str() {
                "anthropic" | "claude" => DEFAULT_ANTHROPIC_MODEL.to_string(),
                "openai" => DEFAULT_OPENAI_MODEL.to_string(),
                _ => DEFAULT_GROQ_MODEL.to_string(),
            }
        })
    }

    /// Get the base URL, falling back to provider defaults.
    pub fn base_url_or_default(&self) -> String {
        self.base_url.clone().unwrap_or_else(|| {
            match self.provider.as_str() {
                "anthropic" | "claude" => DEFAULT_ANTHROPIC_URL.to_string(),
                "openai" => DEFAULT_OPENAI_URL.to_string(),
                _ => DEFAULT_GROQ_URL.to_string(),
            }
        })
    }

    /// Get API key from config or environment.
    pub fn api_key_or_env(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var("MODEL_API_KEY").ok())
    }
}

/// Web search configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// API key (can also be set via the SEARCH_API_KEY environment variable).
    #[serde(skip_serializing)]
    pub api_key: Option<String>,

    /// Base URL for the search API.
    pub base_url: String,

    /// Maximum number of results per query.
    pub max_results: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_TAVILY_URL.to_string(),
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

impl SearchConfig {
    /// Get API key from config or environment.
    pub fn api_key_or_env(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var("SEARCH_API_KEY").ok())
    }
}

/// Agent behavior configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Maximum reasoning steps per turn.
    pub max_steps: u32,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            max_steps: DEFAULT_MAX_STEPS,
        }
    }
}
