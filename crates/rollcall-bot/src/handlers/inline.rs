//! Inline query handler
//!
//! Lets users pull an event summary into any chat. A numeric query
//! looks up that event id; anything else lists recent active events.

use tracing::instrument;
use uuid::Uuid;

use rollcall_service::EventService;

use crate::response::ApiResult;
use crate::state::AppState;
use crate::telegram::{InlineQuery, InlineQueryResultArticle, InputTextMessageContent};
use crate::ui::{render_summary, vote_keyboard};

/// Handle an inline query
#[instrument(skip(state, query), fields(user_id = query.from.id))]
pub async fn handle_inline_query(state: &AppState, query: InlineQuery) -> ApiResult<()> {
    let events = EventService::new(state.service_context());
    let found = events.search_active(&query.query).await?;

    let mut results = Vec::with_capacity(found.len());
    for event in &found {
        let summary = events.summary(event.id).await?;
        results.push(InlineQueryResultArticle {
            result_type: "article",
            id: Uuid::new_v4().to_string(),
            title: event.title.clone(),
            description: format!("Event #{}", event.id),
            input_message_content: InputTextMessageContent {
                message_text: render_summary(&summary),
                parse_mode: Some("Markdown"),
            },
            // shared copies never show admin buttons
            reply_markup: Some(vote_keyboard(event.id, false, event.active)),
        });
    }

    state
        .telegram()
        .answer_inline_query(&query.id, &results)
        .await?;

    Ok(())
}
