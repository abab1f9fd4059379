//! Response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;

use rollcall_core::entities::{Event, Vote};

/// Event representation for the transport layer
#[derive(Debug, Clone, Serialize)]
pub struct EventResponse {
    pub id: i64,
    pub chat_id: i64,
    pub title: String,
    pub max_people: i32,
    pub created_by: i64,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub message_id: Option<i64>,
}

impl From<&Event> for EventResponse {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id.into_inner(),
            chat_id: event.chat_id.into_inner(),
            title: event.title.clone(),
            max_people: event.max_people,
            created_by: event.created_by.into_inner(),
            active: event.active,
            created_at: event.created_at,
            message_id: event.message_id.map(|m| m.into_inner()),
        }
    }
}

/// Vote representation for the transport layer
#[derive(Debug, Clone, Serialize)]
pub struct VoteResponse {
    pub user_id: i64,
    pub user_name: String,
    pub guests: i32,
    /// Seats this vote occupies: 1 + guests
    pub party_size: i64,
    /// Display label: "IN" or "+N"
    pub label: String,
}

impl From<&Vote> for VoteResponse {
    fn from(vote: &Vote) -> Self {
        Self {
            user_id: vote.user_id.into_inner(),
            user_name: vote.user_name.clone(),
            guests: vote.guests.into_inner(),
            party_size: vote.party_size(),
            label: vote.label(),
        }
    }
}

/// An event together with its votes, in submission order
#[derive(Debug, Clone, Serialize)]
pub struct EventSummary {
    pub event: EventResponse,
    pub votes: Vec<VoteResponse>,
    /// Total seats taken: sum of party sizes
    pub total: i64,
}

impl EventSummary {
    pub fn new(event: &Event, votes: &[Vote]) -> Self {
        let total = votes.iter().map(Vote::party_size).sum();
        Self {
            event: EventResponse::from(event),
            votes: votes.iter().map(VoteResponse::from).collect(),
            total,
        }
    }

    /// Seats taken may exceed the limit after the limit was lowered;
    /// existing votes are never evicted.
    pub fn is_over_capacity(&self) -> bool {
        self.total > i64::from(self.event.max_people)
    }
}
