//! Admin capability port
//!
//! "Is this caller an admin of this chat" is answered by the messaging
//! platform, not by the domain. The domain only consumes the boolean; the
//! bot layer implements this trait against the Telegram API.

use async_trait::async_trait;

use crate::error::DomainError;
use crate::value_objects::{ChatId, UserId};

#[async_trait]
pub trait AdminGate: Send + Sync {
    /// Whether `user_id` holds chat-level management rights in `chat_id`
    async fn is_chat_admin(&self, chat_id: ChatId, user_id: UserId) -> Result<bool, DomainError>;
}
