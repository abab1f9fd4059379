//! Request DTOs with validation

use serde::Deserialize;
use validator::Validate;

/// Request to create a new event
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateEventRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(range(min = 1, message = "Capacity must be at least 1"))]
    pub max_people: i32,
}

/// Request to change an event's capacity limit
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SetCapacityRequest {
    #[validate(range(min = 1, message = "Capacity must be at least 1"))]
    pub max_people: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_event_request_valid() {
        let request = CreateEventRequest {
            title: "Friday football".to_string(),
            max_people: 10,
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_create_event_request_rejects_empty_title() {
        let request = CreateEventRequest {
            title: String::new(),
            max_people: 10,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_create_event_request_rejects_zero_capacity() {
        let request = CreateEventRequest {
            title: "Friday football".to_string(),
            max_people: 0,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_set_capacity_request_rejects_zero() {
        let request = SetCapacityRequest { max_people: 0 };
        assert!(request.validate().is_err());
    }
}
