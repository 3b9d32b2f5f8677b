//! Remote strategy: ask the language model, decode any goal it recorded

use super::{rules, Resolution, ResolverMode};
use crate::llm::{LlmRequest, LlmService};
use crate::payload::{self, GoalPayload};
use crate::runtime::ResponseResolver;
use crate::session::{Message, TopicContext};
use async_trait::async_trait;
use std::sync::Arc;

/// Prefix shown when the remote call fails and the demo rules answer instead
pub const FALLBACK_APOLOGY: &str = "I'm having trouble connecting to my brain right now.";

pub struct RemoteResolver {
    llm: Arc<dyn LlmService>,
    system_prompt: String,
}

impl RemoteResolver {
    pub fn new(llm: Arc<dyn LlmService>, system_prompt: String) -> Self {
        Self { llm, system_prompt }
    }
}

#[async_trait]
impl ResponseResolver for RemoteResolver {
    async fn resolve(&self, text: &str, history: &[Message], topic: TopicContext) -> Resolution {
        let request = LlmRequest::chat(history, text, &self.system_prompt);

        match self.llm.complete(&request).await {
            Ok(response) => interpret_reply(response.text, topic),
            Err(e) => {
                tracing::warn!(
                    model = %self.llm.model_id(),
                    kind = ?e.kind,
                    error = %e.message,
                    "Remote reply failed, answering from demo rules"
                );
                fallback_resolution(text, topic)
            }
        }
    }

    fn mode(&self) -> ResolverMode {
        ResolverMode::Remote
    }
}

/// Split a raw model reply into user-visible text and an optional goal.
///
/// The remote path never moves the topic context.
pub fn interpret_reply(raw: String, topic: TopicContext) -> Resolution {
    match payload::decode(&raw) {
        GoalPayload::Found { goal, display_text } => {
            tracing::info!(goal = %goal.name, amount = %goal.target_amount, "Goal payload decoded");
            Resolution::reply(display_text, topic).with_goal(goal)
        }
        GoalPayload::Malformed { reason } => {
            tracing::warn!(%reason, "Failed to parse goal JSON, showing raw reply");
            Resolution::reply(raw, topic)
        }
        GoalPayload::Absent => Resolution::reply(raw, topic),
    }
}

/// Apology plus the demo rules' reply for the same input. No goal, context
/// unchanged.
pub fn fallback_resolution(text: &str, topic: TopicContext) -> Resolution {
    let body = rules::evaluate(text, topic).reply;
    Resolution::reply(format!("{FALLBACK_APOLOGY} (Fallback: {body})"), topic)
}
