//! Display layer: the chat transcript view and the goal list
//!
//! Both views keep what is on screen and broadcast every change so the SSE
//! stream can mirror it to connected clients. The goal board is the system
//! of record for goals; the core never keeps them.

use crate::goal::Goal;
use crate::runtime::{GoalEmitter, PendingHandle, Transcript};
use crate::session::Message;
use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::broadcast;

const EVENT_CHANNEL_CAPACITY: usize = 128;

/// Changes pushed to connected clients
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DisplayEvent {
    Message { message: Message },
    PendingShown { id: PendingHandle },
    PendingCleared { id: PendingHandle },
    GoalCard { card: GoalCard },
}

/// Sender shared by every view
#[derive(Clone)]
pub struct DisplayEvents {
    tx: broadcast::Sender<DisplayEvent>,
}

impl DisplayEvents {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<DisplayEvent> {
        self.tx.subscribe()
    }

    fn publish(&self, event: DisplayEvent) {
        // No subscribers is fine
        let _ = self.tx.send(event);
    }
}

impl Default for DisplayEvents {
    fn default() -> Self {
        Self::new()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// One row of the chat transcript
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChatEntry {
    Message { message: Message },
    Pending { id: PendingHandle },
}

/// The chat transcript view
pub struct ChatView {
    entries: Mutex<Vec<ChatEntry>>,
    events: DisplayEvents,
}

impl ChatView {
    pub fn new(events: DisplayEvents) -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
            events,
        }
    }

    pub fn entries(&self) -> Vec<ChatEntry> {
        lock(&self.entries).clone()
    }
}

impl Transcript for ChatView {
    fn append(&self, message: &Message) {
        lock(&self.entries).push(ChatEntry::Message {
            message: message.clone(),
        });
        self.events.publish(DisplayEvent::Message {
            message: message.clone(),
        });
    }

    fn show_pending(&self) -> PendingHandle {
        let id = PendingHandle::new();
        lock(&self.entries).push(ChatEntry::Pending { id: id.clone() });
        self.events.publish(DisplayEvent::PendingShown { id: id.clone() });
        id
    }

    fn remove_pending(&self, handle: &PendingHandle) {
        lock(&self.entries).retain(|entry| !matches!(entry, ChatEntry::Pending { id } if id == handle));
        self.events.publish(DisplayEvent::PendingCleared { id: handle.clone() });
    }
}

/// A rendered goal card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GoalCard {
    #[serde(flatten)]
    pub goal: Goal,
    pub status: &'static str,
}

/// Snapshot of the goal list
#[derive(Debug, Clone, Serialize)]
pub struct GoalBoardSnapshot {
    pub visible: bool,
    pub goals: Vec<GoalCard>,
}

#[derive(Default)]
struct BoardState {
    visible: bool,
    cards: Vec<GoalCard>,
}

/// The goal list; hidden until the first card arrives
pub struct GoalBoard {
    state: Mutex<BoardState>,
    events: DisplayEvents,
}

impl GoalBoard {
    pub fn new(events: DisplayEvents) -> Self {
        Self {
            state: Mutex::new(BoardState::default()),
            events,
        }
    }

    pub fn snapshot(&self) -> GoalBoardSnapshot {
        let state = lock(&self.state);
        GoalBoardSnapshot {
            visible: state.visible,
            goals: state.cards.clone(),
        }
    }
}

impl GoalEmitter for GoalBoard {
    fn emit(&self, goal: &Goal) {
        let card = GoalCard {
            goal: goal.clone(),
            status: "Active",
        };
        {
            let mut state = lock(&self.state);
            state.visible = true;
            state.cards.insert(0, card.clone());
        }
        self.events.publish(DisplayEvent::GoalCard { card });
    }
}

/// Build both views on one event channel
pub fn build_views() -> (Arc<ChatView>, Arc<GoalBoard>, DisplayEvents) {
    let events = DisplayEvents::new();
    (
        Arc::new(ChatView::new(events.clone())),
        Arc::new(GoalBoard::new(events.clone())),
        events,
    )
}
