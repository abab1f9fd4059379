//! Domain entities - core business objects

mod event;
mod vote;

pub use event::{Event, NewEvent};
pub use vote::Vote;
