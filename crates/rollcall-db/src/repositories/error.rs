//! Error handling utilities for repositories

use rollcall_core::error::DomainError;
use rollcall_core::value_objects::{EventId, UserId};
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Create an "event not found" error
pub fn event_not_found(id: EventId) -> DomainError {
    DomainError::EventNotFound(id)
}

/// Create a "vote not found" error
pub fn vote_not_found(event_id: EventId, user_id: UserId) -> DomainError {
    DomainError::VoteNotFound { event_id, user_id }
}
