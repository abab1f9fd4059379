//! Route definitions

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{health, webhook};
use crate::state::AppState;

/// Create the router: the Telegram webhook plus health probes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/telegram/webhook", post(webhook::receive_update))
        .merge(health_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}
