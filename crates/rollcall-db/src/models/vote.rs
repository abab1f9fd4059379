//! Vote database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the votes table
#[derive(Debug, Clone, FromRow)]
pub struct VoteModel {
    pub event_id: i64,
    pub user_id: i64,
    pub user_name: String,
    pub guests: i32,
    pub updated_at: DateTime<Utc>,
}
