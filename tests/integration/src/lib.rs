//! Integration test utilities for the Rollcall bot
//!
//! This crate provides helpers for running end-to-end tests against
//! the webhook server.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
