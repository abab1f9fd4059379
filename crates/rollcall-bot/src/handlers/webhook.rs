//! Webhook entry point
//!
//! Telegram POSTs updates here. The secret header is checked, then the
//! update is dispatched by kind. Handler failures are logged and the
//! endpoint still returns 200, otherwise Telegram would redeliver the
//! same update indefinitely.

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    Json,
};
use tracing::{instrument, warn};

use crate::response::{ApiError, ApiResult};
use crate::state::AppState;
use crate::telegram::Update;

use super::{callbacks, commands, inline};

/// Header Telegram echoes the configured secret in
pub const SECRET_TOKEN_HEADER: &str = "x-telegram-bot-api-secret-token";

/// POST /telegram/webhook
#[instrument(skip(state, headers, update), fields(update_id = update.update_id))]
pub async fn receive_update(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(update): Json<Update>,
) -> ApiResult<StatusCode> {
    let secret = headers
        .get(SECRET_TOKEN_HEADER)
        .and_then(|v| v.to_str().ok());
    if secret != Some(state.config().telegram.webhook_secret.as_str()) {
        return Err(ApiError::WebhookAuth);
    }

    let update_id = update.update_id;
    if let Err(e) = dispatch(&state, update).await {
        warn!(update_id, error = %e, "Update handling failed");
    }

    Ok(StatusCode::OK)
}

async fn dispatch(state: &AppState, update: Update) -> ApiResult<()> {
    if let Some(query) = update.callback_query {
        return callbacks::handle_callback(state, query).await;
    }
    if let Some(query) = update.inline_query {
        return inline::handle_inline_query(state, query).await;
    }
    if let Some(message) = update.message {
        return commands::handle_message(state, message).await;
    }

    // other update kinds (edits, member changes) are not handled
    Ok(())
}
