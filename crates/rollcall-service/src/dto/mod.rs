//! Data transfer objects

mod requests;
mod responses;

pub use requests::{CreateEventRequest, SetCapacityRequest};
pub use responses::{EventResponse, EventSummary, VoteResponse};
