//! Event entity <-> model mapper

use rollcall_core::entities::Event;
use rollcall_core::value_objects::{ChatId, EventId, MessageId, UserId};

use crate::models::EventModel;

/// Convert EventModel to Event entity
impl From<EventModel> for Event {
    fn from(model: EventModel) -> Self {
        Event {
            id: EventId::new(model.id),
            chat_id: ChatId::new(model.chat_id),
            title: model.title,
            max_people: model.max_people,
            created_by: UserId::new(model.created_by),
            active: model.active,
            created_at: model.created_at,
            message_id: model.message_id.map(MessageId::new),
        }
    }
}
