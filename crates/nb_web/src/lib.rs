use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub mod handlers;
pub mod state;

pub use state::AppState;

/// Health and status routes. The Telegram webhook router is merged in by the binary.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::health))
        .route("/status", get(handlers::status))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}
