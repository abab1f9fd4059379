//! Permission checks for event management
//!
//! Management actions are allowed for the event creator and for chat
//! admins. Admin status comes from the admin gate, which the transport
//! layer provides.

use tracing::instrument;

use rollcall_core::entities::Event;
use rollcall_core::value_objects::UserId;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Permission service
pub struct PermissionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PermissionService<'a> {
    /// Create a new PermissionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Whether the user may manage the event (creator or chat admin)
    #[instrument(skip(self, event), fields(event_id = %event.id))]
    pub async fn can_manage(&self, event: &Event, user_id: UserId) -> ServiceResult<bool> {
        if event.is_creator(user_id) {
            return Ok(true);
        }

        let is_admin = self
            .ctx
            .admin_gate()
            .is_chat_admin(event.chat_id, user_id)
            .await?;

        Ok(is_admin)
    }

    /// Fail with `PermissionDenied` unless the user may manage the event
    pub async fn require_manage(&self, event: &Event, user_id: UserId) -> ServiceResult<()> {
        if self.can_manage(event, user_id).await? {
            Ok(())
        } else {
            Err(ServiceError::permission_denied(
                "only the event creator or a chat admin may do this",
            ))
        }
    }
}
