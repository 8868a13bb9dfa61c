use serde::{Deserialize, Serialize};

/// Who produced a turn in the conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// A single turn in the conversation.
///
/// Turns are immutable once created; the transcript only ever appends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
}

impl Turn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// The ordered session history of user/assistant turns.
///
/// Append-only for the lifetime of a session. Owned by the agent;
/// reset only when the session is re-initialized.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    /// Creates an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a user turn.
    pub fn push_user(&mut self, content: impl Into<String>) {
        self.turns.push(Turn::user(content));
    }

    /// Appends an assistant turn.
    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.turns.push(Turn::assistant(content));
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Serializes the transcript as `{role}: {content}` lines in
    /// chronological order, newline-joined.
    ///
    /// An empty transcript yields an empty string. This is the text used
    /// as the requirements input when generating documents from the
    /// conversation.
    pub fn to_requirements_string(&self) -> String {
        self.turns
            .iter()
            .map(|t| format!("{}: {}", t.role.as_str(), t.content))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Serializes the transcript for inclusion in a reasoning prompt.
    ///
    /// Same line format as [`to_requirements_string`](Self::to_requirements_string);
    /// kept as a separate entry point so the prompt format can diverge
    /// without affecting the requirements contract.
    pub fn to_history_string(&self) -> String {
        self.to_requirements_string()
    }
}
