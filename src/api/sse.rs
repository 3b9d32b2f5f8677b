//! Server-Sent Events support

use crate::display::{ChatEntry, DisplayEvent, GoalBoardSnapshot};
use axum::response::sse::{Event, KeepAlive, Sse};
use futures::stream::Stream;
use serde_json::json;
use std::convert::Infallible;
use std::time::Duration;
use tokio::sync::broadcast;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::StreamExt;

/// Snapshot sent before any live change
pub struct InitSnapshot {
    pub entries: Vec<ChatEntry>,
    pub goals: GoalBoardSnapshot,
}

/// Convert broadcast stream to SSE stream
pub fn sse_stream(
    init: InitSnapshot,
    broadcast_rx: broadcast::Receiver<DisplayEvent>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let init = futures::stream::once(async move { Ok(init_event(init)) });

    let broadcasts = BroadcastStream::new(broadcast_rx).filter_map(|result| match result {
        Ok(event) => Some(Ok(display_event_to_axum(&event))),
        Err(e) => {
            tracing::debug!(error = %e, "SSE subscriber lagged, skipping events");
            None
        }
    });

    Sse::new(init.chain(broadcasts)).keep_alive(
        KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("ping"),
    )
}

fn init_event(init: InitSnapshot) -> Event {
    let data = json!({
        "type": "init",
        "entries": init.entries,
        "goals": init.goals,
    });
    Event::default().event("init").data(data.to_string())
}

fn event_name(event: &DisplayEvent) -> &'static str {
    match event {
        DisplayEvent::Message { .. } => "message",
        DisplayEvent::PendingShown { .. } => "pending_shown",
        DisplayEvent::PendingCleared { .. } => "pending_cleared",
        DisplayEvent::GoalCard { .. } => "goal_card",
    }
}

fn display_event_to_axum(event: &DisplayEvent) -> Event {
    let data = serde_json::to_string(event).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Failed to serialize display event");
        json!({ "type": "error" }).to_string()
    });
    Event::default().event(event_name(event)).data(data)
}
