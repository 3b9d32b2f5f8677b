//! Conversation session state
//!
//! The ordered message history and the topic context tag. Owned by the
//! conversation controller and reset only when the process starts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who authored a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

/// A single chat message. Never mutated once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl Message {
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
            created_at: Utc::now(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, text)
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(Role::Assistant, text)
    }
}

/// What follow-up the assistant is expecting next
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopicContext {
    #[default]
    None,
    AwaitingSpendingLimitConfirmation,
    AwaitingTripAmount,
}

impl TopicContext {
    pub fn as_str(self) -> &'static str {
        match self {
            TopicContext::None => "none",
            TopicContext::AwaitingSpendingLimitConfirmation => "awaiting_spending_limit_confirmation",
            TopicContext::AwaitingTripAmount => "awaiting_trip_amount",
        }
    }
}

/// History plus topic context for one session
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    history: Vec<Message>,
    topic: TopicContext,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message. History is append-only.
    pub fn push(&mut self, message: Message) {
        self.history.push(message);
    }

    pub fn history(&self) -> &[Message] {
        &self.history
    }

    pub fn topic(&self) -> TopicContext {
        self.topic
    }

    pub fn set_topic(&mut self, topic: TopicContext) {
        self.topic = topic;
    }
}
