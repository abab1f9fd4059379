//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{Event, NewEvent, Vote};
use crate::error::DomainError;
use crate::value_objects::{ChatId, EventId, GuestCount, MessageId, UserId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Event Repository
// ============================================================================

#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Insert a new event; the store assigns the id and creation timestamp
    async fn create(&self, new_event: &NewEvent) -> RepoResult<Event>;

    /// Find event by ID
    async fn find_by_id(&self, id: EventId) -> RepoResult<Option<Event>>;

    /// List the most recently created active events in a chat
    async fn find_active_by_chat(&self, chat_id: ChatId, limit: i64) -> RepoResult<Vec<Event>>;

    /// List the most recently created active events across all chats
    /// (inline-query search)
    async fn find_recent_active(&self, limit: i64) -> RepoResult<Vec<Event>>;

    /// Update the capacity limit; existing votes are never evicted
    async fn set_capacity(&self, id: EventId, max_people: i32) -> RepoResult<()>;

    /// Record the Telegram message that carries the rendered summary
    async fn set_message_id(&self, id: EventId, message_id: MessageId) -> RepoResult<()>;

    /// Close the event to further voting; votes remain readable
    async fn close(&self, id: EventId) -> RepoResult<()>;

    /// Delete the event; votes cascade away with it
    async fn delete(&self, id: EventId) -> RepoResult<()>;
}

// ============================================================================
// Vote Repository
// ============================================================================

#[async_trait]
pub trait VoteRepository: Send + Sync {
    /// Find a user's vote for an event
    async fn find(&self, event_id: EventId, user_id: UserId) -> RepoResult<Option<Vote>>;

    /// All votes for an event, ordered by `updated_at` ascending
    async fn find_by_event(&self, event_id: EventId) -> RepoResult<Vec<Vote>>;

    /// Total seats taken: sum of (1 + guests) over all votes
    async fn occupancy(&self, event_id: EventId) -> RepoResult<i64>;

    /// Upsert a vote iff it fits within the event's capacity.
    ///
    /// The occupancy check (excluding the voter's own prior vote) and the
    /// write must execute as one atomic unit against the store, so two
    /// near-simultaneous votes cannot jointly exceed `max_people`. Returns
    /// `false` when the vote was rejected for capacity; prior state is then
    /// unchanged.
    async fn upsert_within_capacity(&self, vote: &Vote) -> RepoResult<bool>;

    /// Admin override: overwrite guests on an existing vote without a
    /// capacity check. Returns `false` if the user has no vote row.
    async fn update_guests(
        &self,
        event_id: EventId,
        user_id: UserId,
        guests: GuestCount,
    ) -> RepoResult<bool>;

    /// Delete a vote; returns `false` if there was nothing to delete
    async fn delete(&self, event_id: EventId, user_id: UserId) -> RepoResult<bool>;
}
