//! Vote service
//!
//! Handles attendance votes: submitting, withdrawing, and admin overrides.

use tracing::{info, instrument};

use rollcall_core::entities::Vote;
use rollcall_core::error::DomainError;
use rollcall_core::value_objects::{EventId, GuestCount, UserId};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::event::EventService;
use super::permission::PermissionService;

/// Vote service
pub struct VoteService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> VoteService<'a> {
    /// Create a new VoteService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Submit or replace the user's vote.
    ///
    /// The capacity check counts seats excluding the user's own prior vote,
    /// so a resubmission replaces rather than stacks. Check and write run
    /// atomically in the store; `CapacityExceeded` leaves the prior vote
    /// untouched.
    #[instrument(skip(self, user_name))]
    pub async fn submit_vote(
        &self,
        event_id: EventId,
        user_id: UserId,
        user_name: String,
        guests: GuestCount,
    ) -> ServiceResult<()> {
        let event = EventService::new(self.ctx).get_event(event_id).await?;
        if !event.is_open() {
            return Err(DomainError::EventClosed(event_id).into());
        }

        let vote = Vote::new(event_id, user_id, user_name, guests);
        let accepted = self.ctx.vote_repo().upsert_within_capacity(&vote).await?;
        if !accepted {
            return Err(DomainError::CapacityExceeded {
                max_people: event.max_people,
                requested: vote.party_size(),
            }
            .into());
        }

        info!(event_id = %event_id, user_id = %user_id, guests = guests.into_inner(), "Vote recorded");

        Ok(())
    }

    /// Withdraw the user's vote. Returns `false` if there was no vote,
    /// which is not an error.
    #[instrument(skip(self))]
    pub async fn remove_vote(&self, event_id: EventId, user_id: UserId) -> ServiceResult<bool> {
        let event = EventService::new(self.ctx).get_event(event_id).await?;
        if !event.is_open() {
            return Err(DomainError::EventClosed(event_id).into());
        }

        let removed = self.ctx.vote_repo().delete(event_id, user_id).await?;
        if removed {
            info!(event_id = %event_id, user_id = %user_id, "Vote withdrawn");
        }

        Ok(removed)
    }

    /// Admin override: set the guest count on an existing vote.
    ///
    /// Deliberately skips the capacity check; the resulting over-capacity
    /// state, if any, shows up in the summary.
    #[instrument(skip(self))]
    pub async fn admin_set_guests(
        &self,
        event_id: EventId,
        actor: UserId,
        target: UserId,
        guests: GuestCount,
    ) -> ServiceResult<()> {
        let event = EventService::new(self.ctx).get_event(event_id).await?;
        PermissionService::new(self.ctx)
            .require_manage(&event, actor)
            .await?;

        let updated = self
            .ctx
            .vote_repo()
            .update_guests(event_id, target, guests)
            .await?;
        if !updated {
            return Err(DomainError::VoteNotFound {
                event_id,
                user_id: target,
            }
            .into());
        }

        info!(event_id = %event_id, target = %target, guests = guests.into_inner(), "Vote overridden");

        Ok(())
    }

    /// Admin override: remove another user's vote
    #[instrument(skip(self))]
    pub async fn admin_remove_vote(
        &self,
        event_id: EventId,
        actor: UserId,
        target: UserId,
    ) -> ServiceResult<bool> {
        let event = EventService::new(self.ctx).get_event(event_id).await?;
        PermissionService::new(self.ctx)
            .require_manage(&event, actor)
            .await?;

        let removed = self.ctx.vote_repo().delete(event_id, target).await?;
        if removed {
            info!(event_id = %event_id, target = %target, "Vote removed by admin");
        }

        Ok(removed)
    }
}
