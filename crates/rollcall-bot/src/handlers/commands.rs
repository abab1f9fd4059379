//! Command handlers
//!
//! Text messages carry slash commands and, for admins mid-flow, the
//! capacity number the bot asked for.

use tracing::instrument;

use rollcall_core::value_objects::{ChatId, EventId, MessageId, UserId};
use rollcall_service::dto::{CreateEventRequest, SetCapacityRequest};
use rollcall_service::{EventService, PermissionService, ServiceError};

use crate::response::ApiResult;
use crate::sessions::PendingAction;
use crate::state::AppState;
use crate::telegram::{Message, User};
use crate::ui::{render_summary, vote_keyboard};

use super::alert_text;

const CREATE_USAGE: &str =
    "Usage:\n/create Event title | max people\nExample:\n/create Soccer | 12";

/// Handle an incoming text message
#[instrument(skip(state, message), fields(chat_id = message.chat.id))]
pub async fn handle_message(state: &AppState, message: Message) -> ApiResult<()> {
    let Some(from) = message.from.clone() else {
        return Ok(());
    };
    let Some(text) = message.text.clone() else {
        return Ok(());
    };
    let chat_id = ChatId::new(message.chat.id);

    if let Some(args) = strip_command(&text, "create") {
        return cmd_create(state, chat_id, &from, args).await;
    }
    if strip_command(&text, "list").is_some() {
        return cmd_list(state, chat_id).await;
    }
    if let Some(args) = strip_command(&text, "show") {
        return cmd_show(state, chat_id, &from, args).await;
    }
    if let Some(args) = strip_command(&text, "capacity") {
        return cmd_capacity(state, chat_id, &from, args).await;
    }
    if let Some(args) = strip_command(&text, "close") {
        return cmd_close(state, chat_id, &from, args).await;
    }
    if let Some(args) = strip_command(&text, "delete") {
        return cmd_delete(state, chat_id, &from, args).await;
    }

    // not a command: maybe the capacity number an admin was asked for
    pending_capacity_reply(state, chat_id, &from, &text).await
}

async fn reply(state: &AppState, chat_id: ChatId, text: &str) -> ApiResult<()> {
    state.telegram().send_message(chat_id, text, None).await?;
    Ok(())
}

async fn reply_service_error(
    state: &AppState,
    chat_id: ChatId,
    err: &ServiceError,
) -> ApiResult<()> {
    reply(state, chat_id, &alert_text(err)).await
}

/// /create Event title | max people
async fn cmd_create(state: &AppState, chat_id: ChatId, from: &User, args: &str) -> ApiResult<()> {
    let Some((title, max_people)) = parse_create_args(args) else {
        return reply(state, chat_id, CREATE_USAGE).await;
    };

    let ctx = state.service_context();
    let events = EventService::new(ctx);
    let created_by = UserId::new(from.id);

    let event = match events
        .create_event(chat_id, created_by, CreateEventRequest { title, max_people })
        .await
    {
        Ok(event) => event,
        Err(err) if err.is_user_facing() => {
            return reply_service_error(state, chat_id, &err).await;
        }
        Err(err) => return Err(err.into()),
    };

    let event_id = EventId::new(event.id);
    let summary = events.summary(event_id).await?;
    let text = render_summary(&summary);

    // creator sees the admin rows right away
    let sent = state
        .telegram()
        .send_message(chat_id, &text, Some(&vote_keyboard(event_id, true, true)))
        .await?;

    events
        .record_message(event_id, MessageId::new(sent.message_id))
        .await?;

    Ok(())
}

/// /list
async fn cmd_list(state: &AppState, chat_id: ChatId) -> ApiResult<()> {
    let events = EventService::new(state.service_context())
        .list_active(chat_id)
        .await?;

    if events.is_empty() {
        return reply(state, chat_id, "No active events.").await;
    }

    let lines: Vec<String> = events
        .iter()
        .map(|e| format!("• {} (ID: {})", e.title, e.id))
        .collect();
    reply(state, chat_id, &lines.join("\n")).await
}

/// /show event_id
async fn cmd_show(state: &AppState, chat_id: ChatId, from: &User, args: &str) -> ApiResult<()> {
    let Some(event_id) = parse_event_id(args) else {
        return reply(state, chat_id, "Usage:\n/show event_id").await;
    };

    let ctx = state.service_context();
    let events = EventService::new(ctx);

    let event = match events.get_event(event_id).await {
        Ok(event) => event,
        Err(err) if err.is_user_facing() => {
            return reply_service_error(state, chat_id, &err).await;
        }
        Err(err) => return Err(err.into()),
    };

    let is_admin = PermissionService::new(ctx)
        .can_manage(&event, UserId::new(from.id))
        .await?;

    let summary = events.summary(event_id).await?;
    let text = render_summary(&summary);
    state
        .telegram()
        .send_message(
            chat_id,
            &text,
            Some(&vote_keyboard(event_id, is_admin, event.active)),
        )
        .await?;

    Ok(())
}

/// /capacity event_id [new_max]
///
/// Without the second argument the bot asks for the number and
/// consumes the admin's next plain-text reply.
async fn cmd_capacity(state: &AppState, chat_id: ChatId, from: &User, args: &str) -> ApiResult<()> {
    let mut parts = args.split_whitespace();
    let Some(event_id) = parts.next().and_then(|s| s.parse::<i64>().ok()) else {
        return reply(state, chat_id, "Usage:\n/capacity event_id new_max").await;
    };

    let Some(max_people) = parts.next().and_then(|s| s.parse::<i32>().ok()) else {
        return prompt_capacity(state, chat_id, from, EventId::new(event_id)).await;
    };

    let result = EventService::new(state.service_context())
        .set_capacity(
            EventId::new(event_id),
            UserId::new(from.id),
            SetCapacityRequest { max_people },
        )
        .await;

    match result {
        Ok(_) => reply(state, chat_id, "✅ Capacity updated").await,
        Err(err) if err.is_user_facing() => reply_service_error(state, chat_id, &err).await,
        Err(err) => Err(err.into()),
    }
}

/// Store a pending capacity prompt and ask for the number
async fn prompt_capacity(
    state: &AppState,
    chat_id: ChatId,
    from: &User,
    event_id: EventId,
) -> ApiResult<()> {
    let ctx = state.service_context();
    let admin = UserId::new(from.id);

    let event = match EventService::new(ctx).get_event(event_id).await {
        Ok(event) => event,
        Err(err) if err.is_user_facing() => {
            return reply_service_error(state, chat_id, &err).await;
        }
        Err(err) => return Err(err.into()),
    };

    if let Err(err) = PermissionService::new(ctx).require_manage(&event, admin).await {
        return reply_service_error(state, chat_id, &err).await;
    }

    state
        .sessions()
        .set(admin, PendingAction::AwaitCapacity { event_id });
    reply(state, chat_id, "Reply with new max capacity:").await
}

/// /close event_id
async fn cmd_close(state: &AppState, chat_id: ChatId, from: &User, args: &str) -> ApiResult<()> {
    let Some(event_id) = parse_event_id(args) else {
        return reply(state, chat_id, "Usage:\n/close event_id").await;
    };

    let result = EventService::new(state.service_context())
        .close_event(event_id, UserId::new(from.id))
        .await;

    match result {
        Ok(()) => reply(state, chat_id, "🔒 Event closed").await,
        Err(err) if err.is_user_facing() => reply_service_error(state, chat_id, &err).await,
        Err(err) => Err(err.into()),
    }
}

/// /delete event_id
async fn cmd_delete(state: &AppState, chat_id: ChatId, from: &User, args: &str) -> ApiResult<()> {
    let Some(event_id) = parse_event_id(args) else {
        return reply(state, chat_id, "Usage:\n/delete event_id").await;
    };

    let result = EventService::new(state.service_context())
        .delete_event(event_id, UserId::new(from.id))
        .await;

    match result {
        Ok(()) => reply(state, chat_id, "🗑 Event deleted").await,
        Err(err) if err.is_user_facing() => reply_service_error(state, chat_id, &err).await,
        Err(err) => Err(err.into()),
    }
}

/// A plain text message while the admin owes us a capacity number
async fn pending_capacity_reply(
    state: &AppState,
    chat_id: ChatId,
    from: &User,
    text: &str,
) -> ApiResult<()> {
    let admin = UserId::new(from.id);
    let Some(PendingAction::AwaitCapacity { event_id }) = state.sessions().get(admin) else {
        return Ok(());
    };

    let Ok(max_people) = text.trim().parse::<i32>() else {
        return reply(state, chat_id, "Reply with a number, e.g. 12").await;
    };

    let result = EventService::new(state.service_context())
        .set_capacity(event_id, admin, SetCapacityRequest { max_people })
        .await;

    match result {
        Ok(_) => {
            state.sessions().clear(admin);
            reply(state, chat_id, "✅ Capacity updated").await
        }
        Err(err) if err.is_user_facing() => reply_service_error(state, chat_id, &err).await,
        Err(err) => Err(err.into()),
    }
}

/// Strip `/name` or `/name@BotName` and return the argument tail
fn strip_command<'a>(text: &'a str, name: &str) -> Option<&'a str> {
    let rest = text.trim().strip_prefix('/')?;
    let (command, args) = match rest.split_once(char::is_whitespace) {
        Some((command, args)) => (command, args),
        None => (rest, ""),
    };
    let command = command.split('@').next().unwrap_or(command);
    (command == name).then(|| args.trim())
}

/// Parse "Event title | max people"
fn parse_create_args(args: &str) -> Option<(String, i32)> {
    let (title, max_people) = args.split_once('|')?;
    let title = title.trim();
    if title.is_empty() {
        return None;
    }
    let max_people: i32 = max_people.trim().parse().ok()?;
    Some((title.to_string(), max_people))
}

fn parse_event_id(args: &str) -> Option<EventId> {
    args.trim().parse::<i64>().ok().map(EventId::new)
}
