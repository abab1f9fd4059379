//! Entity <-> model mappers

mod event;
mod vote;
