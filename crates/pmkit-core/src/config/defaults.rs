//! Default values for pmkit configuration.
//!
//! All hardcoded defaults are centralized here for easy maintenance.

// ============================================================================
// LLM Defaults
// ============================================================================

/// Default LLM provider.
pub const DEFAULT_LLM_PROVIDER: &str = "groq";

/// Default max tokens for LLM responses.
pub const DEFAULT_MAX_TOKENS: u32 = 4096;

/// Default sampling temperature. Zero keeps document output reproducible.
pub const DEFAULT_TEMPERATURE: f32 = 0.0;

// Groq defaults (OpenAI-compatible endpoint)
/// Default Groq API URL.
pub const DEFAULT_GROQ_URL: &str = "https://api.groq.com/openai/v1";
/// Default Groq model.
pub const DEFAULT_GROQ_MODEL: &str = "llama-3.3-70b-versatile";

// OpenAI defaults
/// Default OpenAI API URL.
pub const DEFAULT_OPENAI_URL: &str = "https://api.openai.com/v1";
/// Default OpenAI model.
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o";

// Anthropic defaults
/// Default Anthropic API URL.
pub const DEFAULT_ANTHROPIC_URL: &str = "https://api.anthropic.com/v1/messages";
/// Default Anthropic model.
pub const DEFAULT_ANTHROPIC_MODEL: &str = "claude-sonnet-4-20250514";
/// Default Anthropic API version.
pub const DEFAULT_ANTHROPIC_API_VERSION: &str = "2023-06-01";

// ============================================================================
// Search Defaults
// ============================================================================

/// Default Tavily API URL.
pub const DEFAULT_TAVILY_URL: &str = "https://api.tavily.com";

/// Default maximum number of search results per query.
pub const DEFAULT_MAX_RESULTS: u32 = 5;

// ============================================================================
// Agent Defaults
// ============================================================================

/// Default maximum reasoning steps per turn before the loop gives up
/// and answers with a step-limit notice.
pub const DEFAULT_MAX_STEPS: u32 = 8;
