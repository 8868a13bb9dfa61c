use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;

use crate::config::Config;
use crate::documents::{DocKind, Document, DocumentGenerator};
use crate::llm::{LLMError, Provider, LLM};
use crate::react::{ReactLoop, ReasonError, Reasoner};
use crate::search::{SearchError, SearchTool, TavilyClient};
use crate::transcript::Transcript;

/// The product-manager assistant agent.
///
/// Owns all session state: the conversation transcript, the generated
/// document map, and the API clients. One instance serves one session;
/// there is no shared state between instances and no background work.
/// Every operation is a single blocking call from the caller's point of
/// view.
///
/// The agent starts unconfigured. [`initialize`](Self::initialize) must
/// succeed before [`run_turn`](Self::run_turn) or document generation is
/// available; operations before that point fail with a configuration
/// error and leave no trace in the session.
pub struct PmAgent {
    config: Config,
    session: Option<Session>,
}

/// State constructed at initialization and discarded on re-initialization.
struct Session {
    generator: DocumentGenerator<Arc<dyn LLM>>,
    reasoner: Box<dyn Reasoner>,
    transcript: Transcript,
    documents: HashMap<DocKind, Document>,
}

impl PmAgent {
    /// Creates an unconfigured agent with default configuration.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates an unconfigured agent with the given configuration.
    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            session: None,
        }
    }

    /// Initializes the session from the two API keys.
    ///
    /// Constructs the model client (provider chosen per config), the
    /// search client, the reasoning loop, and an empty transcript. Fails
    /// with a configuration error if either key is empty or client
    /// construction fails. No network call is made; key validity is
    /// checked by the first real request, matching the hosted APIs' own
    /// behavior.
    ///
    /// Idempotent: initializing again discards all prior session state,
    /// including the transcript and any generated documents.
    pub fn initialize(
        &mut self,
        model_api_key: &str,
        search_api_key: &str,
    ) -> Result<(), AgentError> {
        if model_api_key.trim().is_empty() {
            return Err(AgentError::Config("model API key is empty".to_string()));
        }
        if search_api_key.trim().is_empty() {
            return Err(AgentError::Config("search API key is empty".to_string()));
        }

        let llm = Provider::from_config(&self.config.llm)
            .with_api_key(model_api_key)
            .build()
            .map_err(|e| AgentError::Config(e.to_string()))?;

        let search =
            TavilyClient::new(search_api_key).with_base_url(self.config.search.base_url.clone());

        self.install(Arc::from(llm), Box::new(search));
        Ok(())
    }

    /// Initializes the session with injected collaborators.
    ///
    /// Same semantics as [`initialize`](Self::initialize), but the model
    /// client and search tool are supplied by the caller instead of being
    /// built from API keys. This is the seam for swapping providers or
    /// substituting test doubles.
    pub fn initialize_with(&mut self, llm: Arc<dyn LLM>, search: Box<dyn SearchTool>) {
        self.install(llm, search);
    }

    fn install(&mut self, llm: Arc<dyn LLM>, search: Box<dyn SearchTool>) {
        let reasoner = ReactLoop::new(
            llm.clone(),
            search,
            self.config.search.max_results,
            self.config.agent.max_steps,
        );

        self.session = Some(Session {
            generator: DocumentGenerator::new(llm),
            reasoner: Box::new(reasoner),
            transcript: Transcript::new(),
            documents: HashMap::new(),
        });

        tracing::info!("agent session initialized");
    }

    /// Returns true once `initialize` has succeeded.
    pub fn is_initialized(&self) -> bool {
        self.session.is_some()
    }

    /// Runs one free-form conversational turn.
    ///
    /// Appends the user turn and the resulting assistant turn to the
    /// transcript and returns the assistant's text. The reasoning loop may
    /// issue any number of search calls in between; the agent does not
    /// inspect or limit this. If the loop fails outright the transcript is
    /// left untouched, so a failed call can simply be retried.
    pub async fn run_turn(&mut self, user_text: &str) -> Result<String, AgentError> {
        let session = self.session.as_mut().ok_or(AgentError::NotInitialized)?;

        // The turn is recorded only once the reasoner has produced an
        // answer; transcript length therefore always changes by 0 or 2.
        let answer = session
            .reasoner
            .respond(&session.transcript, user_text)
            .await?;

        session.transcript.push_user(user_text);
        session.transcript.push_assistant(answer.clone());

        Ok(answer)
    }

    /// Generates a document of the given kind from the requirements text.
    ///
    /// Bypasses the reasoning loop and the transcript entirely: one
    /// template, one model call. The result is stored under `kind`,
    /// overwriting any previous document of that kind, and returned.
    pub async fn generate_document(
        &mut self,
        kind: DocKind,
        requirements: &str,
    ) -> Result<String, AgentError> {
        self.generate(kind, requirements, "").await
    }

    /// Generates a market research report with optional market data.
    pub async fn generate_market_research(
        &mut self,
        product_info: &str,
        market_data: &str,
    ) -> Result<String, AgentError> {
        self.generate(DocKind::MarketResearch, product_info, market_data)
            .await
    }

    async fn generate(
        &mut self,
        kind: DocKind,
        requirements: &str,
        market_data: &str,
    ) -> Result<String, AgentError> {
        let session = self.session.as_mut().ok_or(AgentError::NotInitialized)?;

        let content = session
            .generator
            .generate(kind, requirements, market_data)
            .await?;

        session
            .documents
            .insert(kind, Document::new(kind, content.clone()));

        Ok(content)
    }

    /// Serializes the transcript as requirements text.
    ///
    /// `{role}: {content}` lines in chronological order; empty before
    /// initialization or when no turns have been taken.
    pub fn requirements_from_transcript(&self) -> String {
        self.session
            .as_ref()
            .map(|s| s.transcript.to_requirements_string())
            .unwrap_or_default()
    }

    /// Returns the stored document for a kind, if one has been generated
    /// this session.
    pub fn document(&self, kind: DocKind) -> Option<&Document> {
        self.session.as_ref()?.documents.get(&kind)
    }

    /// Returns all stored documents in presentation order.
    pub fn documents(&self) -> Vec<&Document> {
        let Some(session) = self.session.as_ref() else {
            return Vec::new();
        };
        DocKind::ALL
            .iter()
            .filter_map(|kind| session.documents.get(kind))
            .collect()
    }

    /// Returns the session transcript, if initialized.
    pub fn transcript(&self) -> Option<&Transcript> {
        self.session.as_ref().map(|s| &s.transcript)
    }
}

impl Default for PmAgent {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors surfaced at the agent's request boundary.
///
/// Configuration-class errors (`NotInitialized`, `Config`) can only occur
/// before or during initialization; everything else is a runtime failure
/// from an underlying API, with the original message preserved. Nothing
/// here terminates the process; callers decide whether to retry or
/// display the failure.
#[derive(Debug, Error)]
pub enum AgentError {
    #[error("Agent is not initialized. Provide both API keys first.")]
    NotInitialized,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("LLM error: {0}")]
    Llm(#[from] LLMError),

    #[error("Search error: {0}")]
    Search(#[from] SearchError),

    #[error("Reasoning error: {0}")]
    Reason(#[from] ReasonError),
}

impl AgentError {
    /// True for configuration-class errors, false for runtime failures.
    pub fn is_config(&self) -> bool {
        matches!(self, AgentError::NotInitialized | AgentError::Config(_))
    }
}
