//! PostgreSQL implementation of VoteRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use rollcall_core::entities::Vote;
use rollcall_core::traits::{RepoResult, VoteRepository};
use rollcall_core::value_objects::{EventId, GuestCount, UserId};

use crate::models::VoteModel;

use super::error::{event_not_found, map_db_error};

/// PostgreSQL implementation of VoteRepository
#[derive(Clone)]
pub struct PgVoteRepository {
    pool: PgPool,
}

impl PgVoteRepository {
    /// Create a new PgVoteRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VoteRepository for PgVoteRepository {
    #[instrument(skip(self))]
    async fn find(&self, event_id: EventId, user_id: UserId) -> RepoResult<Option<Vote>> {
        let result = sqlx::query_as::<_, VoteModel>(
            r"
            SELECT event_id, user_id, user_name, guests, updated_at
            FROM votes
            WHERE event_id = $1 AND user_id = $2
            ",
        )
        .bind(event_id.into_inner())
        .bind(user_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Vote::from))
    }

    #[instrument(skip(self))]
    async fn find_by_event(&self, event_id: EventId) -> RepoResult<Vec<Vote>> {
        let results = sqlx::query_as::<_, VoteModel>(
            r"
            SELECT event_id, user_id, user_name, guests, updated_at
            FROM votes
            WHERE event_id = $1
            ORDER BY updated_at ASC
            ",
        )
        .bind(event_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Vote::from).collect())
    }

    #[instrument(skip(self))]
    async fn occupancy(&self, event_id: EventId) -> RepoResult<i64> {
        let total: i64 = sqlx::query_scalar(
            r"
            SELECT COALESCE(SUM(1 + guests), 0)::BIGINT
            FROM votes
            WHERE event_id = $1
            ",
        )
        .bind(event_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(total)
    }

    #[instrument(skip(self, vote), fields(event_id = %vote.event_id, user_id = %vote.user_id))]
    async fn upsert_within_capacity(&self, vote: &Vote) -> RepoResult<bool> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Lock the event row so concurrent votes on the same event
        // serialize on the capacity check.
        let max_people: Option<i32> = sqlx::query_scalar(
            r"
            SELECT max_people
            FROM events
            WHERE id = $1
            FOR UPDATE
            ",
        )
        .bind(vote.event_id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let Some(max_people) = max_people else {
            return Err(event_not_found(vote.event_id));
        };

        // Occupancy excluding the voter's current row, so a resubmission
        // replaces rather than stacks.
        let occupancy: i64 = sqlx::query_scalar(
            r"
            SELECT COALESCE(SUM(1 + guests), 0)::BIGINT
            FROM votes
            WHERE event_id = $1 AND user_id <> $2
            ",
        )
        .bind(vote.event_id.into_inner())
        .bind(vote.user_id.into_inner())
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if occupancy + vote.party_size() > i64::from(max_people) {
            tx.rollback().await.map_err(map_db_error)?;
            return Ok(false);
        }

        sqlx::query(
            r"
            INSERT INTO votes (event_id, user_id, user_name, guests, updated_at)
            VALUES ($1, $2, $3, $4, NOW())
            ON CONFLICT (event_id, user_id)
            DO UPDATE SET user_name = EXCLUDED.user_name,
                          guests = EXCLUDED.guests,
                          updated_at = NOW()
            ",
        )
        .bind(vote.event_id.into_inner())
        .bind(vote.user_id.into_inner())
        .bind(&vote.user_name)
        .bind(vote.guests.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(true)
    }

    #[instrument(skip(self))]
    async fn update_guests(
        &self,
        event_id: EventId,
        user_id: UserId,
        guests: GuestCount,
    ) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            UPDATE votes
            SET guests = $3, updated_at = NOW()
            WHERE event_id = $1 AND user_id = $2
            ",
        )
        .bind(event_id.into_inner())
        .bind(user_id.into_inner())
        .bind(guests.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn delete(&self, event_id: EventId, user_id: UserId) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            DELETE FROM votes
            WHERE event_id = $1 AND user_id = $2
            ",
        )
        .bind(event_id.into_inner())
        .bind(user_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgVoteRepository>();
    }
}
