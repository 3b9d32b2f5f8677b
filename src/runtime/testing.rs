//! Mock implementations for testing
//!
//! These mocks enable controller and resolver tests without real I/O.

use super::traits::{GoalEmitter, PendingHandle, ResponseResolver, Transcript};
use crate::goal::Goal;
use crate::llm::{LlmError, LlmRequest, LlmResponse, LlmService};
use crate::resolver::{Resolution, ResolverMode};
use crate::session::{Message, TopicContext};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

// ============================================================================
// Mock LLM Client
// ============================================================================

/// Mock LLM client that returns queued responses
pub struct MockLlmClient {
    responses: Mutex<VecDeque<Result<LlmResponse, LlmError>>>,
    model_id: String,
    /// Record of all requests made
    pub requests: Mutex<Vec<LlmRequest>>,
}

impl MockLlmClient {
    pub fn new(model_id: impl Into<String>) -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            model_id: model_id.into(),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Queue a successful response
    pub fn queue_response(&self, response: LlmResponse) {
        self.responses.lock().unwrap().push_back(Ok(response));
    }

    /// Queue an error response
    pub fn queue_error(&self, error: LlmError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    /// Get recorded requests
    pub fn recorded_requests(&self) -> Vec<LlmRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmService for MockLlmClient {
    async fn complete(&self, request: &LlmRequest) -> Result<LlmResponse, LlmError> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(LlmError::network("No mock response queued")))
    }

    fn model_id(&self) -> &str {
        &self.model_id
    }
}

// ============================================================================
// Mock Resolver
// ============================================================================

/// Resolver that counts calls and always greets
#[derive(Default)]
pub struct CountingResolver {
    calls: AtomicUsize,
}

impl CountingResolver {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ResponseResolver for CountingResolver {
    async fn resolve(&self, _text: &str, _history: &[Message], topic: TopicContext) -> Resolution {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Resolution::reply("counted", topic)
    }

    fn mode(&self) -> ResolverMode {
        ResolverMode::Mock
    }
}

// ============================================================================
// Recording display collaborators
// ============================================================================

/// Everything the controller did to the transcript, in order
#[derive(Debug, Clone, PartialEq)]
pub enum TranscriptEvent {
    Message(Message),
    PendingShown(PendingHandle),
    PendingRemoved(PendingHandle),
}

#[derive(Default)]
pub struct RecordingTranscript {
    events: Mutex<Vec<TranscriptEvent>>,
    pending: Mutex<Vec<PendingHandle>>,
}

impl RecordingTranscript {
    pub fn events(&self) -> Vec<TranscriptEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Indicators currently shown
    pub fn pending(&self) -> Vec<PendingHandle> {
        self.pending.lock().unwrap().clone()
    }
}

impl Transcript for RecordingTranscript {
    fn append(&self, message: &Message) {
        self.events
            .lock()
            .unwrap()
            .push(TranscriptEvent::Message(message.clone()));
    }

    fn show_pending(&self) -> PendingHandle {
        let handle = PendingHandle::new();
        self.pending.lock().unwrap().push(handle.clone());
        self.events
            .lock()
            .unwrap()
            .push(TranscriptEvent::PendingShown(handle.clone()));
        handle
    }

    fn remove_pending(&self, handle: &PendingHandle) {
        self.pending.lock().unwrap().retain(|h| h != handle);
        self.events
            .lock()
            .unwrap()
            .push(TranscriptEvent::PendingRemoved(handle.clone()));
    }
}

#[derive(Default)]
pub struct RecordingEmitter {
    goals: Mutex<Vec<Goal>>,
}

impl RecordingEmitter {
    pub fn goals(&self) -> Vec<Goal> {
        self.goals.lock().unwrap().clone()
    }
}

impl GoalEmitter for RecordingEmitter {
    fn emit(&self, goal: &Goal) {
        self.goals.lock().unwrap().push(goal.clone());
    }
}
