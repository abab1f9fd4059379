//! Value objects - typed identifiers and validated scalar values

mod guests;
mod ids;

pub use guests::GuestCount;
pub use ids::{ChatId, EventId, IdParseError, MessageId, UserId};
