//! PostgreSQL implementation of EventRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use rollcall_core::entities::{Event, NewEvent};
use rollcall_core::traits::{EventRepository, RepoResult};
use rollcall_core::value_objects::{ChatId, EventId, MessageId};

use crate::models::EventModel;

use super::error::{event_not_found, map_db_error};

/// PostgreSQL implementation of EventRepository
#[derive(Clone)]
pub struct PgEventRepository {
    pool: PgPool,
}

impl PgEventRepository {
    /// Create a new PgEventRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventRepository for PgEventRepository {
    #[instrument(skip(self))]
    async fn create(&self, new_event: &NewEvent) -> RepoResult<Event> {
        let result = sqlx::query_as::<_, EventModel>(
            r"
            INSERT INTO events (chat_id, title, max_people, created_by)
            VALUES ($1, $2, $3, $4)
            RETURNING id, chat_id, title, max_people, created_by, active, created_at, message_id
            ",
        )
        .bind(new_event.chat_id.into_inner())
        .bind(&new_event.title)
        .bind(new_event.max_people)
        .bind(new_event.created_by.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Event::from(result))
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: EventId) -> RepoResult<Option<Event>> {
        let result = sqlx::query_as::<_, EventModel>(
            r"
            SELECT id, chat_id, title, max_people, created_by, active, created_at, message_id
            FROM events
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Event::from))
    }

    #[instrument(skip(self))]
    async fn find_active_by_chat(&self, chat_id: ChatId, limit: i64) -> RepoResult<Vec<Event>> {
        let results = sqlx::query_as::<_, EventModel>(
            r"
            SELECT id, chat_id, title, max_people, created_by, active, created_at, message_id
            FROM events
            WHERE chat_id = $1 AND active = TRUE
            ORDER BY created_at DESC
            LIMIT $2
            ",
        )
        .bind(chat_id.into_inner())
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Event::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_recent_active(&self, limit: i64) -> RepoResult<Vec<Event>> {
        let results = sqlx::query_as::<_, EventModel>(
            r"
            SELECT id, chat_id, title, max_people, created_by, active, created_at, message_id
            FROM events
            WHERE active = TRUE
            ORDER BY created_at DESC
            LIMIT $1
            ",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Event::from).collect())
    }

    #[instrument(skip(self))]
    async fn set_capacity(&self, id: EventId, max_people: i32) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE events
            SET max_people = $2
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .bind(max_people)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(event_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn set_message_id(&self, id: EventId, message_id: MessageId) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE events
            SET message_id = $2
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .bind(message_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(event_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn close(&self, id: EventId) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE events
            SET active = FALSE
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(event_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: EventId) -> RepoResult<()> {
        // votes go with it via ON DELETE CASCADE
        let result = sqlx::query(
            r"
            DELETE FROM events
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(event_not_found(id));
        }

        Ok(())
    }
}
