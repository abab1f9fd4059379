//! Event database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the events table
#[derive(Debug, Clone, FromRow)]
pub struct EventModel {
    pub id: i64,
    pub chat_id: i64,
    pub title: String,
    pub max_people: i32,
    pub created_by: i64,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub message_id: Option<i64>,
}
