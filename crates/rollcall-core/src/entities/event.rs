//! Event entity - a plannable activity with a capacity limit

use chrono::{DateTime, Utc};

use crate::value_objects::{ChatId, EventId, MessageId, UserId};

/// Event entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: EventId,
    pub chat_id: ChatId,
    pub title: String,
    pub max_people: i32,
    pub created_by: UserId,
    /// False once the event is closed; closed events accept no vote mutations
    pub active: bool,
    pub created_at: DateTime<Utc>,
    /// Telegram message carrying the rendered summary, recorded after the
    /// first send so later updates can edit it in place
    pub message_id: Option<MessageId>,
}

/// Fields needed to create an event; the id and timestamp come from the store
#[derive(Debug, Clone)]
pub struct NewEvent {
    pub chat_id: ChatId,
    pub title: String,
    pub max_people: i32,
    pub created_by: UserId,
}

impl Event {
    /// Check if a user created this event
    #[inline]
    pub fn is_creator(&self, user_id: UserId) -> bool {
        self.created_by == user_id
    }

    /// Whether the event still accepts vote mutations
    #[inline]
    pub fn is_open(&self) -> bool {
        self.active
    }

    /// Capacity rule: would a party of `party_size` fit next to the seats
    /// already taken by everyone else?
    ///
    /// `occupancy_excluding_voter` must not count the voter's own prior vote,
    /// since a resubmission replaces it rather than adding to it.
    #[inline]
    pub fn can_accept(&self, occupancy_excluding_voter: i64, party_size: i64) -> bool {
        occupancy_excluding_voter + party_size <= i64::from(self.max_people)
    }
}
