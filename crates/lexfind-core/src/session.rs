//! Ephemeral per-process chat session state.
//!
//! A session holds the conversation transcript and a feedback latch. Nothing
//! is persisted; the session lives and dies with the process.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Assistant => "Assistant",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

/// Conversation state for one chat session.
///
/// The session id is sent to the QA service with every question so the
/// backend can keep conversational context across turns.
#[derive(Debug, Clone)]
pub struct ChatSession {
    id: String,
    messages: Vec<Message>,
    feedback_sent: bool,
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            messages: Vec::new(),
            feedback_sent: false,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.messages.push(Message {
            role: Role::User,
            content: content.into(),
        });
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.messages.push(Message {
            role: Role::Assistant,
            content: content.into(),
        });
    }

    /// Role-prefixed transcript, one line per message, for the feedback
    /// mail body.
    pub fn transcript(&self) -> String {
        self.messages
            .iter()
            .map(|m| format!("{}: {}", m.role.as_str(), m.content))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Feedback is forwarded at most once per session.
    pub fn feedback_sent(&self) -> bool {
        self.feedback_sent
    }

    pub fn mark_feedback_sent(&mut self) {
        self.feedback_sent = true;
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}
