//! HTTP request handlers

use super::sse::{sse_stream, InitSnapshot};
use super::types::{
    ChatRequest, ChatResponse, ErrorResponse, StatusResponse, TranscriptResponse,
};
use super::AppState;
use crate::dashboard::{self, Dashboard};
use crate::display::GoalBoardSnapshot;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Chat submission
        .route("/api/chat", post(send_chat))
        // Read-only views
        .route("/api/transcript", get(get_transcript))
        .route("/api/goals", get(get_goals))
        .route("/api/dashboard", get(get_dashboard))
        .route("/api/status", get(get_status))
        // Live display changes
        .route("/api/events", get(stream_events))
        .route("/version", get(get_version))
        .with_state(state)
}

// ============================================================
// Chat
// ============================================================

async fn send_chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    // Detached from the request: the turn finishes even if the client leaves
    let controller = state.controller.clone();
    let turn = tokio::spawn(async move { controller.submit(&req.text).await });

    let response = match turn.await {
        Ok(Some(resolution)) => ChatResponse::from(resolution),
        Ok(None) => ChatResponse::ignored(),
        Err(e) => {
            tracing::error!(error = %e, "Chat turn task failed");
            return Err(AppError::Internal("Chat turn failed".to_string()));
        }
    };
    Ok(Json(response))
}

// ============================================================
// Views
// ============================================================

async fn get_transcript(State(state): State<AppState>) -> Json<TranscriptResponse> {
    Json(TranscriptResponse {
        entries: state.chat_view.entries(),
    })
}

async fn get_goals(State(state): State<AppState>) -> Json<GoalBoardSnapshot> {
    Json(state.goal_board.snapshot())
}

async fn get_dashboard() -> Json<Dashboard> {
    Json(dashboard::snapshot())
}

async fn get_status(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        mode: state.mode(),
        model: state.model.clone(),
    })
}

async fn stream_events(State(state): State<AppState>) -> impl IntoResponse {
    // Subscribe before the snapshot so nothing falls between the two
    let rx = state.events.subscribe();
    let init = InitSnapshot {
        entries: state.chat_view.entries(),
        goals: state.goal_board.snapshot(),
    };
    sse_stream(init, rx)
}

async fn get_version() -> &'static str {
    concat!("myspend ", env!("CARGO_PKG_VERSION"))
}

// ============================================================
// Error Handling
// ============================================================

enum AppError {
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };
        (status, Json(ErrorResponse::new(message))).into_response()
    }
}
