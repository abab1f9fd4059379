//! Repository implementations

mod error;
mod event;
mod vote;

pub use event::PgEventRepository;
pub use vote::PgVoteRepository;
