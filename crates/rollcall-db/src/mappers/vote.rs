//! Vote entity <-> model mapper

use rollcall_core::entities::Vote;
use rollcall_core::value_objects::{EventId, GuestCount, UserId};

use crate::models::VoteModel;

/// Convert VoteModel to Vote entity
impl From<VoteModel> for Vote {
    fn from(model: VoteModel) -> Self {
        Vote {
            event_id: EventId::new(model.event_id),
            user_id: UserId::new(model.user_id),
            user_name: model.user_name,
            // range is enforced by the schema CHECK constraint
            guests: GuestCount::clamped(model.guests),
            updated_at: model.updated_at,
        }
    }
}
