//! Conversation controller

use super::traits::{GoalEmitter, ResponseResolver, Transcript};
use crate::resolver::Resolution;
use crate::session::{Message, SessionState, TopicContext};
use tokio::sync::Mutex;

/// Owns the session and drives one turn per `submit`.
///
/// Submissions are not serialized: the session lock is released while the
/// resolver runs, so two turns in flight each show their own indicator and
/// the one that finishes last decides the topic context.
pub struct ConversationController<R, T, E>
where
    R: ResponseResolver,
    T: Transcript,
    E: GoalEmitter,
{
    session: Mutex<SessionState>,
    resolver: R,
    transcript: T,
    emitter: E,
}

impl<R, T, E> ConversationController<R, T, E>
where
    R: ResponseResolver,
    T: Transcript,
    E: GoalEmitter,
{
    pub fn new(resolver: R, transcript: T, emitter: E) -> Self {
        Self {
            session: Mutex::new(SessionState::new()),
            resolver,
            transcript,
            emitter,
        }
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Run one user turn. Returns `None` when the input is blank, in which
    /// case nothing happened.
    pub async fn submit(&self, text: &str) -> Option<Resolution> {
        let text = text.trim();
        if text.is_empty() {
            tracing::debug!("Ignoring empty chat input");
            return None;
        }

        let user_message = Message::user(text);
        let (prior_history, topic) = {
            let mut session = self.session.lock().await;
            let prior = session.history().to_vec();
            session.push(user_message.clone());
            (prior, session.topic())
        };
        self.transcript.append(&user_message);

        let pending = self.transcript.show_pending();
        tracing::info!(
            pending = %pending,
            topic = topic.as_str(),
            mode = ?self.resolver.mode(),
            "Resolving chat turn"
        );

        let resolution = self.resolver.resolve(text, &prior_history, topic).await;

        self.transcript.remove_pending(&pending);

        if let Some(goal) = &resolution.goal {
            tracing::info!(goal = %goal.name, amount = %goal.target_amount, "Emitting goal card");
            self.emitter.emit(goal);
        }

        let reply = Message::assistant(resolution.reply.clone());
        {
            let mut session = self.session.lock().await;
            session.set_topic(resolution.topic);
            session.push(reply.clone());
        }
        self.transcript.append(&reply);

        Some(resolution)
    }

    /// Copy of the history so far
    pub async fn history(&self) -> Vec<Message> {
        self.session.lock().await.history().to_vec()
    }

    pub async fn topic(&self) -> TopicContext {
        self.session.lock().await.topic()
    }
}
