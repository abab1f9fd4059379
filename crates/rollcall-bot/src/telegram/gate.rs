//! Admin gate backed by the Bot API
//!
//! The domain layer only knows the `AdminGate` trait; this is the live
//! implementation asking Telegram who administers the chat.

use std::sync::Arc;

use async_trait::async_trait;

use rollcall_core::error::DomainError;
use rollcall_core::traits::AdminGate;
use rollcall_core::value_objects::{ChatId, UserId};

use super::client::TelegramClient;

/// getChatMember-based admin gate
pub struct TelegramAdminGate {
    client: Arc<TelegramClient>,
}

impl TelegramAdminGate {
    pub fn new(client: Arc<TelegramClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AdminGate for TelegramAdminGate {
    async fn is_chat_admin(&self, chat_id: ChatId, user_id: UserId) -> Result<bool, DomainError> {
        let member = self
            .client
            .get_chat_member(chat_id, user_id)
            .await
            .map_err(|e| DomainError::InternalError(e.to_string()))?;

        Ok(member.is_admin())
    }
}
