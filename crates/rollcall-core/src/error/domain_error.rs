//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{EventId, UserId};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Event not found: {0}")]
    EventNotFound(EventId),

    #[error("No vote by user {user_id} for event {event_id}")]
    VoteNotFound { event_id: EventId, user_id: UserId },

    // =========================================================================
    // State / Capacity Errors
    // =========================================================================
    #[error("Event {0} is closed to voting")]
    EventClosed(EventId),

    #[error("Capacity exceeded: a party of {requested} does not fit within {max_people}")]
    CapacityExceeded { max_people: i32, requested: i64 },

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Invalid capacity: {0} (must be at least 1)")]
    InvalidCapacity(i32),

    #[error("Invalid guest count: {0} (must be 0-4)")]
    InvalidGuestCount(i32),

    #[error("Validation error: {0}")]
    ValidationError(String),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for logs and API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::EventNotFound(_) => "EVENT_NOT_FOUND",
            Self::VoteNotFound { .. } => "VOTE_NOT_FOUND",
            Self::EventClosed(_) => "EVENT_CLOSED",
            Self::CapacityExceeded { .. } => "CAPACITY_EXCEEDED",
            Self::InvalidCapacity(_) => "INVALID_CAPACITY",
            Self::InvalidGuestCount(_) => "INVALID_GUEST_COUNT",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::PermissionDenied(_) => "PERMISSION_DENIED",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::EventNotFound(_) | Self::VoteNotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidCapacity(_) | Self::InvalidGuestCount(_) | Self::ValidationError(_)
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::PermissionDenied(_))
    }

    /// Check if this is a conflict with current event state
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::EventClosed(_) | Self::CapacityExceeded { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = DomainError::EventNotFound(EventId::new(1));
        assert_eq!(err.code(), "EVENT_NOT_FOUND");

        let err = DomainError::CapacityExceeded {
            max_people: 10,
            requested: 3,
        };
        assert_eq!(err.code(), "CAPACITY_EXCEEDED");
    }

    #[test]
    fn test_is_not_found() {
        assert!(DomainError::EventNotFound(EventId::new(1)).is_not_found());
        assert!(!DomainError::EventClosed(EventId::new(1)).is_not_found());
    }

    #[test]
    fn test_is_conflict() {
        assert!(DomainError::EventClosed(EventId::new(1)).is_conflict());
        assert!(DomainError::CapacityExceeded {
            max_people: 2,
            requested: 3
        }
        .is_conflict());
        assert!(!DomainError::InvalidCapacity(0).is_conflict());
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::EventClosed(EventId::new(5));
        assert_eq!(err.to_string(), "Event 5 is closed to voting");

        let err = DomainError::InvalidCapacity(0);
        assert_eq!(err.to_string(), "Invalid capacity: 0 (must be at least 1)");
    }
}
