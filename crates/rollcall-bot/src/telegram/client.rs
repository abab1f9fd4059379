//! Bot API client
//!
//! Thin reqwest wrapper over the handful of methods the bot calls.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::instrument;

use rollcall_core::value_objects::{ChatId, MessageId, UserId};

use super::api::{ChatMember, InlineKeyboardMarkup, InlineQueryResultArticle, Message};

/// Errors talking to the Bot API
#[derive(Debug, Error)]
pub enum TelegramError {
    #[error("Transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Bot API error: {0}")]
    Api(String),
}

/// Envelope every Bot API response comes in
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct ApiResponse<T> {
    ok: bool,
    #[serde(default)]
    result: Option<T>,
    #[serde(default)]
    description: Option<String>,
}

/// Telegram Bot API client
#[derive(Debug, Clone)]
pub struct TelegramClient {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct SendMessage<'a> {
    chat_id: i64,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    parse_mode: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_markup: Option<&'a InlineKeyboardMarkup>,
}

#[derive(Debug, Serialize)]
struct EditMessageText<'a> {
    chat_id: i64,
    message_id: i64,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    parse_mode: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_markup: Option<&'a InlineKeyboardMarkup>,
}

#[derive(Debug, Serialize)]
struct AnswerCallbackQuery<'a> {
    callback_query_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<&'a str>,
    show_alert: bool,
}

#[derive(Debug, Serialize)]
struct AnswerInlineQuery<'a> {
    inline_query_id: &'a str,
    results: &'a [InlineQueryResultArticle],
    cache_time: u32,
    is_personal: bool,
}

#[derive(Debug, Serialize)]
struct GetChatMember {
    chat_id: i64,
    user_id: i64,
}

#[derive(Debug, Serialize)]
struct DeleteMessage {
    chat_id: i64,
    message_id: i64,
}

impl TelegramClient {
    /// Create a client for the given API base (e.g. `https://api.telegram.org`)
    /// and bot token
    pub fn new(api_base: &str, bot_token: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: format!("{}/bot{}", api_base.trim_end_matches('/'), bot_token),
        }
    }

    async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        payload: &impl Serialize,
    ) -> Result<T, TelegramError> {
        let url = format!("{}/{}", self.base_url, method);
        let response: ApiResponse<T> = self
            .http
            .post(&url)
            .json(payload)
            .send()
            .await?
            .json()
            .await?;

        if !response.ok {
            return Err(TelegramError::Api(
                response
                    .description
                    .unwrap_or_else(|| "unknown error".to_string()),
            ));
        }

        response
            .result
            .ok_or_else(|| TelegramError::Api("missing result".to_string()))
    }

    /// Send a Markdown message, optionally with an inline keyboard
    #[instrument(skip(self, text, reply_markup))]
    pub async fn send_message(
        &self,
        chat_id: ChatId,
        text: &str,
        reply_markup: Option<&InlineKeyboardMarkup>,
    ) -> Result<Message, TelegramError> {
        self.call(
            "sendMessage",
            &SendMessage {
                chat_id: chat_id.into_inner(),
                text,
                parse_mode: Some("Markdown"),
                reply_markup,
            },
        )
        .await
    }

    /// Replace the text and keyboard of an existing message
    #[instrument(skip(self, text, reply_markup))]
    pub async fn edit_message_text(
        &self,
        chat_id: ChatId,
        message_id: MessageId,
        text: &str,
        reply_markup: Option<&InlineKeyboardMarkup>,
    ) -> Result<(), TelegramError> {
        // result is the edited Message or `true`; neither is needed
        let _: serde_json::Value = self
            .call(
                "editMessageText",
                &EditMessageText {
                    chat_id: chat_id.into_inner(),
                    message_id: message_id.into_inner(),
                    text,
                    parse_mode: Some("Markdown"),
                    reply_markup,
                },
            )
            .await?;
        Ok(())
    }

    /// Acknowledge a callback query, optionally with an alert popup
    #[instrument(skip(self, text))]
    pub async fn answer_callback_query(
        &self,
        callback_query_id: &str,
        text: Option<&str>,
        show_alert: bool,
    ) -> Result<(), TelegramError> {
        let _: serde_json::Value = self
            .call(
                "answerCallbackQuery",
                &AnswerCallbackQuery {
                    callback_query_id,
                    text,
                    show_alert,
                },
            )
            .await?;
        Ok(())
    }

    /// Answer an inline query with article results
    #[instrument(skip(self, results))]
    pub async fn answer_inline_query(
        &self,
        inline_query_id: &str,
        results: &[InlineQueryResultArticle],
    ) -> Result<(), TelegramError> {
        let _: serde_json::Value = self
            .call(
                "answerInlineQuery",
                &AnswerInlineQuery {
                    inline_query_id,
                    results,
                    cache_time: 1,
                    is_personal: true,
                },
            )
            .await?;
        Ok(())
    }

    /// Look up a user's membership in a chat
    #[instrument(skip(self))]
    pub async fn get_chat_member(
        &self,
        chat_id: ChatId,
        user_id: UserId,
    ) -> Result<ChatMember, TelegramError> {
        self.call(
            "getChatMember",
            &GetChatMember {
                chat_id: chat_id.into_inner(),
                user_id: user_id.into_inner(),
            },
        )
        .await
    }

    /// Delete a message
    #[instrument(skip(self))]
    pub async fn delete_message(
        &self,
        chat_id: ChatId,
        message_id: MessageId,
    ) -> Result<(), TelegramError> {
        let _: serde_json::Value = self
            .call(
                "deleteMessage",
                &DeleteMessage {
                    chat_id: chat_id.into_inner(),
                    message_id: message_id.into_inner(),
                },
            )
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_strips_trailing_slash() {
        let client = TelegramClient::new("https://api.telegram.org/", "123:abc");
        assert_eq!(client.base_url, "https://api.telegram.org/bot123:abc");
    }

    #[test]
    fn test_send_message_payload_shape() {
        let payload = SendMessage {
            chat_id: -100,
            text: "hi",
            parse_mode: Some("Markdown"),
            reply_markup: None,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["chat_id"], -100);
        assert_eq!(json["parse_mode"], "Markdown");
        assert!(json.get("reply_markup").is_none());
    }
}
