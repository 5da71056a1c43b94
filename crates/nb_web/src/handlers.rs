use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;
use crate::AppState;

pub const ALIVE: &str = "Travel bot is alive!";

/// Uptime probe.
pub async fn health() -> &'static str {
    ALIVE
}

/// Number of posted links and the configured source names.
pub async fn status(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.store.count().await {
        Ok(posted) => (
            StatusCode::OK,
            Json(json!({ "posted": posted, "sources": state.sources })),
        ),
        Err(e) => {
            tracing::error!("Status lookup failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            )
        }
    }
}
