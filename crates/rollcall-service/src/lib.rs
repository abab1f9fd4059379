//! # rollcall-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    EventService, PermissionService, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult, VoteService,
};
