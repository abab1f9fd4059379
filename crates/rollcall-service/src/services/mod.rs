//! Business logic services

mod context;
mod error;
mod event;
mod permission;
mod vote;

#[cfg(test)]
pub(crate) mod testing;

pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use event::EventService;
pub use permission::PermissionService;
pub use vote::VoteService;
