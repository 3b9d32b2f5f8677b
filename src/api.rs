//! HTTP API for the `MySpend` assistant
//!
//! Chat submission, read-only views of the transcript and goal list, the
//! dashboard data and a server-sent event stream of display changes.

mod handlers;
mod sse;
mod types;

pub use handlers::create_router;
pub use types::*;

use crate::config::AppConfig;
use crate::display::{build_views, ChatView, DisplayEvents, GoalBoard};
use crate::resolver::{build_resolver, ResolverMode};
use crate::runtime::{ConversationController, ProductionController, ResponseResolver};
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub controller: Arc<ProductionController>,
    pub chat_view: Arc<ChatView>,
    pub goal_board: Arc<GoalBoard>,
    pub events: DisplayEvents,
    /// Remote model name, when one is answering
    pub model: Option<String>,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        let resolver = build_resolver(config);
        let model = (resolver.mode() == ResolverMode::Remote).then(|| config.model.clone());
        Self::with_resolver(resolver, model)
    }

    pub fn with_resolver(resolver: Arc<dyn ResponseResolver>, model: Option<String>) -> Self {
        let (chat_view, goal_board, events) = build_views();
        let controller = Arc::new(ConversationController::new(
            resolver,
            chat_view.clone(),
            goal_board.clone(),
        ));
        Self {
            controller,
            chat_view,
            goal_board,
            events,
            model,
        }
    }

    pub fn mode(&self) -> ResolverMode {
        self.controller.resolver().mode()
    }
}
