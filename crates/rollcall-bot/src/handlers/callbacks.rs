//! Callback query handlers
//!
//! Every button press lands here. Rejections surface as alert popups;
//! successful mutations re-render the summary message in place.

use tracing::instrument;

use rollcall_core::value_objects::{ChatId, EventId, MessageId, UserId};
use rollcall_service::{EventService, PermissionService, ServiceError, VoteService};

use crate::response::ApiResult;
use crate::sessions::PendingAction;
use crate::state::AppState;
use crate::telegram::{AdminAction, CallbackAction, CallbackQuery, VoteChoice};
use crate::ui::{render_summary, user_select_keyboard, vote_choice_keyboard, vote_keyboard};

use super::alert_text;

/// Handle a callback query
#[instrument(skip(state, query), fields(user_id = query.from.id))]
pub async fn handle_callback(state: &AppState, query: CallbackQuery) -> ApiResult<()> {
    let action = query.data.as_deref().and_then(CallbackAction::parse);
    let Some(action) = action else {
        // stale or malformed button; just stop the client spinner
        return ack(state, &query, None).await;
    };

    match action {
        CallbackAction::Vote { event_id, choice } => {
            handle_vote(state, &query, event_id, choice).await
        }
        CallbackAction::Admin { event_id, action } => {
            handle_admin(state, &query, event_id, action).await
        }
        CallbackAction::SelectUser { event_id, user_id } => {
            handle_select_user(state, &query, event_id, user_id).await
        }
        CallbackAction::CancelSelect => handle_cancel_select(state, &query).await,
        CallbackAction::SetVote { choice } => handle_set_vote(state, &query, choice).await,
    }
}

async fn ack(state: &AppState, query: &CallbackQuery, text: Option<&str>) -> ApiResult<()> {
    state
        .telegram()
        .answer_callback_query(&query.id, text, text.is_some())
        .await?;
    Ok(())
}

/// Message the pressed button was attached to
fn origin(query: &CallbackQuery) -> Option<(ChatId, MessageId)> {
    query
        .message
        .as_ref()
        .map(|m| (ChatId::new(m.chat.id), MessageId::new(m.message_id)))
}

/// Re-render the summary into the message that carried the button
async fn rerender(
    state: &AppState,
    query: &CallbackQuery,
    event_id: EventId,
    actor: UserId,
) -> ApiResult<()> {
    let Some((chat_id, message_id)) = origin(query) else {
        return Ok(());
    };

    let ctx = state.service_context();
    let events = EventService::new(ctx);
    let event = events.get_event(event_id).await?;
    let is_admin = PermissionService::new(ctx).can_manage(&event, actor).await?;

    let summary = events.summary(event_id).await?;
    state
        .telegram()
        .edit_message_text(
            chat_id,
            message_id,
            &render_summary(&summary),
            Some(&vote_keyboard(event_id, is_admin, event.active)),
        )
        .await?;

    Ok(())
}

async fn handle_vote(
    state: &AppState,
    query: &CallbackQuery,
    event_id: EventId,
    choice: VoteChoice,
) -> ApiResult<()> {
    let user_id = UserId::new(query.from.id);
    let votes = VoteService::new(state.service_context());

    let result = match choice {
        VoteChoice::In(guests) => {
            votes
                .submit_vote(event_id, user_id, query.from.full_name(), guests)
                .await
        }
        VoteChoice::Out => votes.remove_vote(event_id, user_id).await.map(|_| ()),
    };

    match result {
        Ok(()) => {
            ack(state, query, None).await?;
            rerender(state, query, event_id, user_id).await
        }
        Err(err) if err.is_user_facing() => ack(state, query, Some(&alert_text(&err))).await,
        Err(err) => Err(err.into()),
    }
}

async fn handle_admin(
    state: &AppState,
    query: &CallbackQuery,
    event_id: EventId,
    action: AdminAction,
) -> ApiResult<()> {
    let actor = UserId::new(query.from.id);
    let ctx = state.service_context();
    let events = EventService::new(ctx);

    let event = match events.get_event(event_id).await {
        Ok(event) => event,
        Err(err) if err.is_user_facing() => {
            return ack(state, query, Some(&alert_text(&err))).await;
        }
        Err(err) => return Err(err.into()),
    };

    // all admin buttons are gated the same way
    if !PermissionService::new(ctx).can_manage(&event, actor).await? {
        return ack(state, query, Some("Admins only")).await;
    }

    match action {
        AdminAction::Manage => {
            ack(state, query, None).await?;
            let Some((chat_id, message_id)) = origin(query) else {
                return Ok(());
            };
            let summary = events.summary(event_id).await?;
            state
                .telegram()
                .edit_message_text(
                    chat_id,
                    message_id,
                    "Select user to edit:",
                    Some(&user_select_keyboard(event_id, &summary.votes)),
                )
                .await?;
            Ok(())
        }
        AdminAction::Capacity => {
            ack(state, query, None).await?;
            state
                .sessions()
                .set(actor, PendingAction::AwaitCapacity { event_id });
            if let Some((chat_id, _)) = origin(query) {
                state
                    .telegram()
                    .send_message(chat_id, "Reply with new max capacity:", None)
                    .await?;
            }
            Ok(())
        }
        AdminAction::Close => {
            match events.close_event(event_id, actor).await {
                Ok(()) => {
                    ack(state, query, None).await?;
                    rerender(state, query, event_id, actor).await
                }
                Err(err) if err.is_user_facing() => {
                    ack(state, query, Some(&alert_text(&err))).await
                }
                Err(err) => Err(err.into()),
            }
        }
        AdminAction::Delete => {
            match events.delete_event(event_id, actor).await {
                Ok(()) => {
                    ack(state, query, None).await?;
                    if let Some((chat_id, message_id)) = origin(query) {
                        state
                            .telegram()
                            .edit_message_text(chat_id, message_id, "🗑 Event deleted", None)
                            .await?;
                    }
                    Ok(())
                }
                Err(err) if err.is_user_facing() => {
                    ack(state, query, Some(&alert_text(&err))).await
                }
                Err(err) => Err(err.into()),
            }
        }
    }
}

async fn handle_select_user(
    state: &AppState,
    query: &CallbackQuery,
    event_id: EventId,
    target: UserId,
) -> ApiResult<()> {
    let actor = UserId::new(query.from.id);
    let ctx = state.service_context();

    let event = match EventService::new(ctx).get_event(event_id).await {
        Ok(event) => event,
        Err(err) if err.is_user_facing() => {
            return ack(state, query, Some(&alert_text(&err))).await;
        }
        Err(err) => return Err(err.into()),
    };

    if !PermissionService::new(ctx).can_manage(&event, actor).await? {
        return ack(state, query, Some("Admins only")).await;
    }

    state
        .sessions()
        .set(actor, PendingAction::AwaitVoteChoice { event_id, target });

    ack(state, query, None).await?;
    if let Some((chat_id, message_id)) = origin(query) {
        state
            .telegram()
            .edit_message_text(
                chat_id,
                message_id,
                "Choose vote:",
                Some(&vote_choice_keyboard()),
            )
            .await?;
    }
    Ok(())
}

async fn handle_cancel_select(state: &AppState, query: &CallbackQuery) -> ApiResult<()> {
    state.sessions().clear(UserId::new(query.from.id));
    ack(state, query, None).await?;
    if let Some((chat_id, message_id)) = origin(query) {
        state.telegram().delete_message(chat_id, message_id).await?;
    }
    Ok(())
}

async fn handle_set_vote(
    state: &AppState,
    query: &CallbackQuery,
    choice: VoteChoice,
) -> ApiResult<()> {
    let actor = UserId::new(query.from.id);
    let Some(PendingAction::AwaitVoteChoice { event_id, target }) = state.sessions().take(actor)
    else {
        // expired or foreign session
        return ack(state, query, None).await;
    };

    let votes = VoteService::new(state.service_context());
    let result: Result<(), ServiceError> = match choice {
        VoteChoice::In(guests) => votes.admin_set_guests(event_id, actor, target, guests).await,
        VoteChoice::Out => votes.admin_remove_vote(event_id, actor, target).await.map(|_| ()),
    };

    match result {
        Ok(()) => {
            ack(state, query, None).await?;
            rerender(state, query, event_id, actor).await
        }
        Err(err) if err.is_user_facing() => ack(state, query, Some(&alert_text(&err))).await,
        Err(err) => Err(err.into()),
    }
}
