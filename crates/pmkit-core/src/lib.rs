pub mod agent;
pub mod config;
pub mod documents;
pub mod llm;
pub mod react;
pub mod search;
pub mod transcript;

pub use agent::{AgentError, PmAgent};
pub use config::{Config, ConfigError};
pub use documents::{DocKind, Document, DocumentGenerator};
pub use llm::{ChatMessage, ClaudeClient, LLMError, OpenAIClient, Provider, LLM};
pub use react::{ReactLoop, ReasonError, Reasoner};
pub use search::{SearchError, SearchResult, SearchTool, TavilyClient};
pub use transcript::{Role, Transcript, Turn};
