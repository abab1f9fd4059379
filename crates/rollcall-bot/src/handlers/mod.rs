//! Update handlers

pub mod callbacks;
pub mod commands;
pub mod health;
pub mod inline;
pub mod webhook;

use rollcall_core::DomainError;
use rollcall_service::ServiceError;

/// Short text shown to the user when an action is rejected, either as a
/// callback alert or a chat reply.
pub(crate) fn alert_text(err: &ServiceError) -> String {
    match err {
        ServiceError::Domain(DomainError::EventClosed(_)) => "Voting is closed".to_string(),
        ServiceError::Domain(DomainError::CapacityExceeded { .. }) => {
            "❌ Capacity exceeded".to_string()
        }
        ServiceError::Domain(DomainError::EventNotFound(_)) => "❌ Event not found.".to_string(),
        ServiceError::Domain(DomainError::VoteNotFound { .. }) => "❌ No such vote.".to_string(),
        ServiceError::Domain(DomainError::InvalidCapacity(_)) => {
            "❌ Capacity must be at least 1".to_string()
        }
        ServiceError::Domain(DomainError::PermissionDenied(_))
        | ServiceError::PermissionDenied { .. } => "Admins only".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rollcall_core::value_objects::EventId;

    #[test]
    fn test_alert_text_for_rejections() {
        let err = ServiceError::Domain(DomainError::EventClosed(EventId::new(1)));
        assert_eq!(alert_text(&err), "Voting is closed");

        let err = ServiceError::Domain(DomainError::CapacityExceeded {
            max_people: 4,
            requested: 2,
        });
        assert_eq!(alert_text(&err), "❌ Capacity exceeded");

        let err = ServiceError::permission_denied("nope");
        assert_eq!(alert_text(&err), "Admins only");
    }
}
