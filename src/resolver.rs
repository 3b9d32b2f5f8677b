//! Response resolution
//!
//! Turns one user utterance into a reply, an optional goal and the next topic
//! context. Two strategies exist; which one runs is decided once at start-up
//! by whether a remote credential is configured.

mod mock;
mod remote;
pub mod rules;

#[cfg(test)]
mod proptests;

pub use mock::{MockResolver, DEFAULT_MOCK_DELAY};
pub use remote::{fallback_resolution, interpret_reply, RemoteResolver, FALLBACK_APOLOGY};

use crate::config::AppConfig;
use crate::goal::Goal;
use crate::llm::{GeminiService, LlmService, LoggingService};
use crate::runtime::ResponseResolver;
use crate::session::TopicContext;
use crate::system_prompt::build_system_prompt;
use serde::Serialize;
use std::sync::Arc;

/// What the resolver produced for one turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub reply: String,
    pub goal: Option<Goal>,
    pub topic: TopicContext,
}

impl Resolution {
    /// A plain text reply that moves the context to `topic`
    pub fn reply(reply: impl Into<String>, topic: TopicContext) -> Self {
        Self {
            reply: reply.into(),
            goal: None,
            topic,
        }
    }

    #[must_use]
    pub fn with_goal(mut self, goal: Goal) -> Self {
        self.goal = Some(goal);
        self
    }
}

/// Which strategy is answering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolverMode {
    Mock,
    Remote,
}

/// Pick the strategy for this process
pub fn build_resolver(config: &AppConfig) -> Arc<dyn ResponseResolver> {
    match &config.api_key {
        Some(api_key) => {
            let gemini: Arc<dyn LlmService> = Arc::new(GeminiService::new(
                api_key.clone(),
                &config.model,
                &config.base_url,
            ));
            let llm = Arc::new(LoggingService::new(gemini));
            tracing::info!(model = %config.model, "Assistant using remote model");
            Arc::new(RemoteResolver::new(llm, build_system_prompt()))
        }
        None => {
            tracing::warn!("No GOOGLE_API_KEY configured. Assistant running in demo mode.");
            Arc::new(MockResolver::new(config.mock_delay))
        }
    }
}
