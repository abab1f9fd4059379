//! Pending admin interactions
//!
//! Some admin flows span two updates: the capacity button waits for a
//! number in the next text message, and the manage-votes flow waits for
//! a vote choice after a user was selected. Sessions are keyed by the
//! admin's user id; a newer action replaces the old one.

use dashmap::DashMap;

use rollcall_core::value_objects::{EventId, UserId};

/// What the bot is waiting for from a given admin
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    /// Next text message is the new capacity for this event
    AwaitCapacity { event_id: EventId },
    /// Next `av:` callback sets the vote of this user
    AwaitVoteChoice { event_id: EventId, target: UserId },
}

/// In-memory store of pending admin actions
#[derive(Debug, Default)]
pub struct AdminSessionStore {
    inner: DashMap<i64, PendingAction>,
}

impl AdminSessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or replace) a pending action for the admin
    pub fn set(&self, admin: UserId, action: PendingAction) {
        self.inner.insert(admin.into_inner(), action);
    }

    /// Consume the pending action, if any
    pub fn take(&self, admin: UserId) -> Option<PendingAction> {
        self.inner.remove(&admin.into_inner()).map(|(_, v)| v)
    }

    /// Peek at the pending action without consuming it
    pub fn get(&self, admin: UserId) -> Option<PendingAction> {
        self.inner.get(&admin.into_inner()).map(|e| e.clone())
    }

    /// Drop the pending action, if any
    pub fn clear(&self, admin: UserId) {
        self.inner.remove(&admin.into_inner());
    }
}
