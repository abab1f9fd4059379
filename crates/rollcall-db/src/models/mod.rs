//! Database row models

mod event;
mod vote;

pub use event::EventModel;
pub use vote::VoteModel;
