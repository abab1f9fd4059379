//! Test fixtures and update builders
//!
//! Builds the update payloads Telegram would POST to the webhook.

use serde_json::{json, Value};
use std::sync::atomic::{AtomicI64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicI64 = AtomicI64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> i64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Secret used by the test server and the fixtures
pub const TEST_WEBHOOK_SECRET: &str = "integration-test-secret";

/// An update carrying nothing the bot handles
pub fn bare_update() -> Value {
    json!({ "update_id": unique_suffix() })
}

/// A text message update from the given user in the given chat
pub fn message_update(chat_id: i64, user_id: i64, text: &str) -> Value {
    json!({
        "update_id": unique_suffix(),
        "message": {
            "message_id": unique_suffix(),
            "from": { "id": user_id, "first_name": "Test", "is_bot": false },
            "chat": { "id": chat_id, "type": "group", "title": "Test group" },
            "date": 1700000000,
            "text": text
        }
    })
}

/// A callback query update pressing a button on a summary message
pub fn callback_update(chat_id: i64, user_id: i64, data: &str) -> Value {
    json!({
        "update_id": unique_suffix(),
        "callback_query": {
            "id": format!("cbq{}", unique_suffix()),
            "from": { "id": user_id, "first_name": "Test", "is_bot": false },
            "message": {
                "message_id": unique_suffix(),
                "chat": { "id": chat_id, "type": "group", "title": "Test group" },
                "date": 1700000000
            },
            "data": data
        }
    })
}
