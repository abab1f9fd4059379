//! Vote entity - one user's attendance decision for an event

use chrono::{DateTime, Utc};

use crate::value_objects::{EventId, GuestCount, UserId};

/// Vote entity, identified by `(event_id, user_id)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vote {
    pub event_id: EventId,
    pub user_id: UserId,
    /// Display-name snapshot, overwritten on every vote update
    pub user_name: String,
    pub guests: GuestCount,
    pub updated_at: DateTime<Utc>,
}

impl Vote {
    /// Create a new vote stamped with the current time
    pub fn new(event_id: EventId, user_id: UserId, user_name: String, guests: GuestCount) -> Self {
        Self {
            event_id,
            user_id,
            user_name,
            guests,
            updated_at: Utc::now(),
        }
    }

    /// Seats this vote occupies: the voter plus their guests
    #[inline]
    pub fn party_size(&self) -> i64 {
        self.guests.party_size()
    }

    /// Label shown next to the voter in a rendered summary
    pub fn label(&self) -> String {
        if self.guests == GuestCount::NONE {
            "IN".to_string()
        } else {
            format!("+{}", self.guests)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_party_size() {
        let vote = Vote::new(
            EventId::new(1),
            UserId::new(2),
            "Alice".to_string(),
            GuestCount::new(2).unwrap(),
        );
        assert_eq!(vote.party_size(), 3);
    }

    #[test]
    fn test_label() {
        let solo = Vote::new(EventId::new(1), UserId::new(2), "A".into(), GuestCount::NONE);
        assert_eq!(solo.label(), "IN");

        let party = Vote::new(
            EventId::new(1),
            UserId::new(3),
            "B".into(),
            GuestCount::new(4).unwrap(),
        );
        assert_eq!(party.label(), "+4");
    }
}
