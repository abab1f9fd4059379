//! Ports - interfaces the domain needs the outside world to provide

mod admin_gate;
mod repositories;

pub use admin_gate::AdminGate;
pub use repositories::{EventRepository, RepoResult, VoteRepository};
