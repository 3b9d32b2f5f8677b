//! Common types for LLM interactions

use crate::session::{Message, Role};

/// Sampling temperature used for assistant replies
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// LLM request
#[derive(Debug, Clone)]
pub struct LlmRequest {
    pub system: Option<String>,
    pub messages: Vec<LlmMessage>,
    pub temperature: Option<f32>,
}

impl LlmRequest {
    /// Build a chat request: prior history, then the new user turn
    pub fn chat(history: &[Message], user_text: &str, system: &str) -> Self {
        let mut messages: Vec<LlmMessage> = history.iter().map(LlmMessage::from).collect();
        messages.push(LlmMessage::user(user_text));
        Self {
            system: Some(system.to_string()),
            messages,
            temperature: Some(DEFAULT_TEMPERATURE),
        }
    }
}

/// Message in conversation
#[derive(Debug, Clone, PartialEq)]
pub struct LlmMessage {
    pub role: MessageRole,
    pub text: String,
}

impl LlmMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            text: text.into(),
        }
    }
}

impl From<&Message> for LlmMessage {
    fn from(message: &Message) -> Self {
        match message.role {
            Role::User => Self::user(message.text.clone()),
            Role::Assistant => Self::assistant(message.text.clone()),
        }
    }
}

/// Message role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    User,
    Assistant,
}

/// LLM response
#[derive(Debug, Clone)]
pub struct LlmResponse {
    pub text: String,
    pub usage: Usage,
}

impl LlmResponse {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            usage: Usage::default(),
        }
    }
}

/// Usage statistics
#[derive(Debug, Clone, Default)]
pub struct Usage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}
