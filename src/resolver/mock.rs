//! Demo-mode strategy: the local rule table behind a simulated delay

use super::{rules, Resolution, ResolverMode};
use crate::runtime::ResponseResolver;
use crate::session::{Message, TopicContext};
use async_trait::async_trait;
use std::time::Duration;

/// Simulated "thinking" latency
pub const DEFAULT_MOCK_DELAY: Duration = Duration::from_millis(1000);

pub struct MockResolver {
    delay: Duration,
}

impl MockResolver {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for MockResolver {
    fn default() -> Self {
        Self::new(DEFAULT_MOCK_DELAY)
    }
}

#[async_trait]
impl ResponseResolver for MockResolver {
    async fn resolve(&self, text: &str, _history: &[Message], topic: TopicContext) -> Resolution {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        rules::evaluate(text, topic)
    }

    fn mode(&self) -> ResolverMode {
        ResolverMode::Mock
    }
}
