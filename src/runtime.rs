//! Runtime for executing chat turns
//!
//! The controller plus the traits for the collaborators it drives. The
//! production wiring uses the display views from [`crate::display`].

mod controller;
pub mod traits;

#[cfg(test)]
pub mod testing;

pub use controller::ConversationController;
pub use traits::*;

use crate::display::{ChatView, GoalBoard};
use std::sync::Arc;

/// Controller wired to the real resolver and display views
pub type ProductionController =
    ConversationController<Arc<dyn ResponseResolver>, Arc<ChatView>, Arc<GoalBoard>>;
