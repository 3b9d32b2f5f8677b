//! Trait abstractions for the controller's collaborators
//!
//! These traits enable testing the controller with mock implementations.

use crate::goal::Goal;
use crate::resolver::{Resolution, ResolverMode};
use crate::session::{Message, TopicContext};
use async_trait::async_trait;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// Produces a reply for one user turn
#[async_trait]
pub trait ResponseResolver: Send + Sync {
    /// Resolve `text` given the history before this turn. Never fails: every
    /// internal failure degrades to a textual reply.
    async fn resolve(&self, text: &str, history: &[Message], topic: TopicContext) -> Resolution;

    /// Which strategy this is
    fn mode(&self) -> ResolverMode;
}

/// Handle to one pending ("typing") indicator
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PendingHandle(String);

impl PendingHandle {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for PendingHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PendingHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The chat transcript as the user sees it
pub trait Transcript: Send + Sync {
    /// Show a message
    fn append(&self, message: &Message);

    /// Show a new pending indicator
    fn show_pending(&self) -> PendingHandle;

    /// Remove the indicator for `handle`; other indicators stay
    fn remove_pending(&self, handle: &PendingHandle);
}

/// Renders goal cards
pub trait GoalEmitter: Send + Sync {
    fn emit(&self, goal: &Goal);
}

// ============================================================================
// Arc implementations for trait objects
// ============================================================================

#[async_trait]
impl<T: ResponseResolver + ?Sized> ResponseResolver for Arc<T> {
    async fn resolve(&self, text: &str, history: &[Message], topic: TopicContext) -> Resolution {
        (**self).resolve(text, history, topic).await
    }

    fn mode(&self) -> ResolverMode {
        (**self).mode()
    }
}

impl<T: Transcript + ?Sized> Transcript for Arc<T> {
    fn append(&self, message: &Message) {
        (**self).append(message);
    }

    fn show_pending(&self) -> PendingHandle {
        (**self).show_pending()
    }

    fn remove_pending(&self, handle: &PendingHandle) {
        (**self).remove_pending(handle);
    }
}

impl<T: GoalEmitter + ?Sized> GoalEmitter for Arc<T> {
    fn emit(&self, goal: &Goal) {
        (**self).emit(goal);
    }
}
