//! API request and response types

use crate::display::ChatEntry;
use crate::goal::Goal;
use crate::resolver::{Resolution, ResolverMode};
use serde::{Deserialize, Serialize};

/// Request to send a chat message
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub text: String,
}

/// Response for chat action. `accepted` is false for blank input.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatResponse {
    pub accepted: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<Goal>,
}

impl ChatResponse {
    pub fn ignored() -> Self {
        Self {
            accepted: false,
            reply: None,
            goal: None,
        }
    }
}

impl From<Resolution> for ChatResponse {
    fn from(resolution: Resolution) -> Self {
        Self {
            accepted: true,
            reply: Some(resolution.reply),
            goal: resolution.goal,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TranscriptResponse {
    pub entries: Vec<ChatEntry>,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub mode: ResolverMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

/// Error body for failed requests
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
