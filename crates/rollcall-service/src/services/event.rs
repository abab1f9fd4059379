//! Event service
//!
//! Handles event creation, lookup, and management (capacity, close, delete).

use tracing::{info, instrument};
use validator::Validate;

use rollcall_core::entities::{Event, NewEvent};
use rollcall_core::error::DomainError;
use rollcall_core::value_objects::{ChatId, EventId, MessageId, UserId};

use crate::dto::{CreateEventRequest, EventResponse, EventSummary, SetCapacityRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::permission::PermissionService;

/// How many events a chat listing or search returns at most
pub const LIST_LIMIT: i64 = 10;

/// Event service
pub struct EventService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> EventService<'a> {
    /// Create a new EventService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a new event
    #[instrument(skip(self, request))]
    pub async fn create_event(
        &self,
        chat_id: ChatId,
        created_by: UserId,
        request: CreateEventRequest,
    ) -> ServiceResult<EventResponse> {
        if request.max_people < 1 {
            return Err(DomainError::InvalidCapacity(request.max_people).into());
        }
        request
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;

        let new_event = NewEvent {
            chat_id,
            title: request.title.trim().to_string(),
            max_people: request.max_people,
            created_by,
        };

        let event = self.ctx.event_repo().create(&new_event).await?;

        info!(event_id = %event.id, chat_id = %chat_id, "Event created");

        Ok(EventResponse::from(&event))
    }

    /// Get event entity by ID
    #[instrument(skip(self))]
    pub async fn get_event(&self, event_id: EventId) -> ServiceResult<Event> {
        self.ctx
            .event_repo()
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| DomainError::EventNotFound(event_id).into())
    }

    /// Get the event together with its votes, in submission order
    #[instrument(skip(self))]
    pub async fn summary(&self, event_id: EventId) -> ServiceResult<EventSummary> {
        let event = self.get_event(event_id).await?;
        let votes = self.ctx.vote_repo().find_by_event(event_id).await?;
        Ok(EventSummary::new(&event, &votes))
    }

    /// Most recently created active events in a chat
    #[instrument(skip(self))]
    pub async fn list_active(&self, chat_id: ChatId) -> ServiceResult<Vec<Event>> {
        Ok(self
            .ctx
            .event_repo()
            .find_active_by_chat(chat_id, LIST_LIMIT)
            .await?)
    }

    /// Resolve an inline-query string to active events.
    ///
    /// A numeric query looks up that event id; anything else returns the
    /// most recently created active events.
    #[instrument(skip(self))]
    pub async fn search_active(&self, query: &str) -> ServiceResult<Vec<Event>> {
        if let Ok(id) = query.trim().parse::<i64>() {
            let event = self.ctx.event_repo().find_by_id(EventId::new(id)).await?;
            return Ok(event.into_iter().filter(|e| e.active).collect());
        }

        Ok(self.ctx.event_repo().find_recent_active(LIST_LIMIT).await?)
    }

    /// Change the capacity limit.
    ///
    /// Lowering the limit below the current occupancy is allowed; existing
    /// votes are never evicted, new votes are rejected until seats free up.
    #[instrument(skip(self, request))]
    pub async fn set_capacity(
        &self,
        event_id: EventId,
        actor: UserId,
        request: SetCapacityRequest,
    ) -> ServiceResult<EventResponse> {
        if request.max_people < 1 {
            return Err(DomainError::InvalidCapacity(request.max_people).into());
        }

        let event = self.get_event(event_id).await?;
        PermissionService::new(self.ctx)
            .require_manage(&event, actor)
            .await?;

        self.ctx
            .event_repo()
            .set_capacity(event_id, request.max_people)
            .await?;

        info!(event_id = %event_id, max_people = request.max_people, "Capacity changed");

        let event = self.get_event(event_id).await?;
        Ok(EventResponse::from(&event))
    }

    /// Close the event to further voting; votes remain readable
    #[instrument(skip(self))]
    pub async fn close_event(&self, event_id: EventId, actor: UserId) -> ServiceResult<()> {
        let event = self.get_event(event_id).await?;
        PermissionService::new(self.ctx)
            .require_manage(&event, actor)
            .await?;

        self.ctx.event_repo().close(event_id).await?;

        info!(event_id = %event_id, "Event closed");

        Ok(())
    }

    /// Delete the event and all its votes
    #[instrument(skip(self))]
    pub async fn delete_event(&self, event_id: EventId, actor: UserId) -> ServiceResult<()> {
        let event = self.get_event(event_id).await?;
        PermissionService::new(self.ctx)
            .require_manage(&event, actor)
            .await?;

        self.ctx.event_repo().delete(event_id).await?;

        info!(event_id = %event_id, "Event deleted");

        Ok(())
    }

    /// Record the chat message that carries the rendered summary
    #[instrument(skip(self))]
    pub async fn record_message(
        &self,
        event_id: EventId,
        message_id: MessageId,
    ) -> ServiceResult<()> {
        Ok(self
            .ctx
            .event_repo()
            .set_message_id(event_id, message_id)
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::{test_context, InMemoryStore, StaticAdminGate};
    use rollcall_core::value_objects::GuestCount;

    fn create_request(title: &str, max_people: i32) -> CreateEventRequest {
        CreateEventRequest {
            title: title.to_string(),
            max_people,
        }
    }

    #[tokio::test]
    async fn test_create_event_assigns_id_and_defaults() {
        let ctx = test_context(InMemoryStore::new(), StaticAdminGate::new());
        let service = EventService::new(&ctx);

        let event = service
            .create_event(ChatId::new(-100), UserId::new(7), create_request("Padel", 4))
            .await
            .unwrap();

        assert_eq!(event.id, 1);
        assert_eq!(event.max_people, 4);
        assert!(event.active);
        assert!(event.message_id.is_none());
    }

    #[tokio::test]
    async fn test_create_event_rejects_invalid_capacity() {
        let ctx = test_context(InMemoryStore::new(), StaticAdminGate::new());
        let service = EventService::new(&ctx);

        let err = service
            .create_event(ChatId::new(-100), UserId::new(7), create_request("Padel", 0))
            .await
            .unwrap_err();

        assert_eq!(err.error_code(), "INVALID_CAPACITY");
    }

    #[tokio::test]
    async fn test_set_capacity_requires_creator_or_admin() {
        let chat = ChatId::new(-100);
        let gate = StaticAdminGate::new().with_admin(chat, UserId::new(99));
        let ctx = test_context(InMemoryStore::new(), gate);
        let service = EventService::new(&ctx);

        let event = service
            .create_event(chat, UserId::new(7), create_request("Padel", 4))
            .await
            .unwrap();
        let event_id = EventId::new(event.id);

        // random user is denied
        let err = service
            .set_capacity(event_id, UserId::new(13), SetCapacityRequest { max_people: 6 })
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 403);

        // chat admin is allowed
        let updated = service
            .set_capacity(event_id, UserId::new(99), SetCapacityRequest { max_people: 6 })
            .await
            .unwrap();
        assert_eq!(updated.max_people, 6);

        // creator is allowed
        let updated = service
            .set_capacity(event_id, UserId::new(7), SetCapacityRequest { max_people: 8 })
            .await
            .unwrap();
        assert_eq!(updated.max_people, 8);
    }

    #[tokio::test]
    async fn test_lowering_capacity_keeps_existing_votes() {
        let store = InMemoryStore::new();
        let ctx = test_context(store, StaticAdminGate::new());
        let events = EventService::new(&ctx);
        let votes = crate::services::VoteService::new(&ctx);

        let creator = UserId::new(7);
        let event = events
            .create_event(ChatId::new(-100), creator, create_request("Padel", 10))
            .await
            .unwrap();
        let event_id = EventId::new(event.id);

        votes
            .submit_vote(
                event_id,
                UserId::new(1),
                "alice".to_string(),
                GuestCount::clamped(3),
            )
            .await
            .unwrap();

        events
            .set_capacity(event_id, creator, SetCapacityRequest { max_people: 2 })
            .await
            .unwrap();

        let summary = events.summary(event_id).await.unwrap();
        assert_eq!(summary.total, 4);
        assert!(summary.is_over_capacity());
    }

    #[tokio::test]
    async fn test_close_keeps_votes_readable() {
        let ctx = test_context(InMemoryStore::new(), StaticAdminGate::new());
        let events = EventService::new(&ctx);
        let votes = crate::services::VoteService::new(&ctx);

        let creator = UserId::new(7);
        let event = events
            .create_event(ChatId::new(-100), creator, create_request("Padel", 4))
            .await
            .unwrap();
        let event_id = EventId::new(event.id);

        votes
            .submit_vote(event_id, UserId::new(1), "alice".to_string(), GuestCount::NONE)
            .await
            .unwrap();

        events.close_event(event_id, creator).await.unwrap();

        let summary = events.summary(event_id).await.unwrap();
        assert!(!summary.event.active);
        assert_eq!(summary.votes.len(), 1);
    }

    #[tokio::test]
    async fn test_delete_cascades_votes() {
        let store = InMemoryStore::new();
        let ctx = test_context(store.clone(), StaticAdminGate::new());
        let events = EventService::new(&ctx);
        let votes = crate::services::VoteService::new(&ctx);

        let creator = UserId::new(7);
        let event = events
            .create_event(ChatId::new(-100), creator, create_request("Padel", 4))
            .await
            .unwrap();
        let event_id = EventId::new(event.id);

        votes
            .submit_vote(event_id, UserId::new(1), "alice".to_string(), GuestCount::NONE)
            .await
            .unwrap();

        events.delete_event(event_id, creator).await.unwrap();

        let err = events.summary(event_id).await.unwrap_err();
        assert_eq!(err.error_code(), "EVENT_NOT_FOUND");

        use rollcall_core::traits::VoteRepository;
        assert_eq!(store.occupancy(event_id).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_search_active_by_numeric_query() {
        let ctx = test_context(InMemoryStore::new(), StaticAdminGate::new());
        let events = EventService::new(&ctx);

        let creator = UserId::new(7);
        let event = events
            .create_event(ChatId::new(-100), creator, create_request("Padel", 4))
            .await
            .unwrap();

        let found = events.search_active(&event.id.to_string()).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id.into_inner(), event.id);

        // closed events are not surfaced
        events
            .close_event(EventId::new(event.id), creator)
            .await
            .unwrap();
        let found = events.search_active(&event.id.to_string()).await.unwrap();
        assert!(found.is_empty());
    }
}
