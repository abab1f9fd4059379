//! # rollcall-core
//!
//! Domain layer containing entities, value objects, repository traits, and the
//! admin capability port. This crate has zero dependencies on infrastructure
//! (database, web framework, Telegram transport, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Event, NewEvent, Vote};
pub use error::DomainError;
pub use traits::{AdminGate, EventRepository, RepoResult, VoteRepository};
pub use value_objects::{ChatId, EventId, GuestCount, IdParseError, MessageId, UserId};
