//! Callback data grammar
//!
//! Button payloads are short colon-separated strings:
//!
//! - `v:{event_id}:{0..4}` vote with that many guests
//! - `v:{event_id}:out` withdraw
//! - `a:{event_id}:{manage|capacity|close|delete}` admin menu
//! - `au:{event_id}:{user_id}` admin selected a voter to edit
//! - `au:cancel` abort the selection
//! - `av:{0..4|out}` admin sets the selected voter's choice

use rollcall_core::value_objects::{EventId, GuestCount, UserId};

/// A vote button: join with N guests, or withdraw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteChoice {
    In(GuestCount),
    Out,
}

impl VoteChoice {
    fn parse(value: &str) -> Option<Self> {
        if value == "out" {
            return Some(Self::Out);
        }
        let guests: i32 = value.parse().ok()?;
        GuestCount::new(guests).ok().map(Self::In)
    }

    fn encode(self) -> String {
        match self {
            Self::In(guests) => guests.into_inner().to_string(),
            Self::Out => "out".to_string(),
        }
    }
}

/// Admin menu buttons under the event summary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminAction {
    Manage,
    Capacity,
    Close,
    Delete,
}

impl AdminAction {
    fn parse(value: &str) -> Option<Self> {
        match value {
            "manage" => Some(Self::Manage),
            "capacity" => Some(Self::Capacity),
            "close" => Some(Self::Close),
            "delete" => Some(Self::Delete),
            _ => None,
        }
    }

    fn encode(self) -> &'static str {
        match self {
            Self::Manage => "manage",
            Self::Capacity => "capacity",
            Self::Close => "close",
            Self::Delete => "delete",
        }
    }
}

/// A parsed callback payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackAction {
    Vote {
        event_id: EventId,
        choice: VoteChoice,
    },
    Admin {
        event_id: EventId,
        action: AdminAction,
    },
    SelectUser {
        event_id: EventId,
        user_id: UserId,
    },
    CancelSelect,
    SetVote {
        choice: VoteChoice,
    },
}

impl CallbackAction {
    /// Parse a callback data string; `None` for anything malformed
    pub fn parse(data: &str) -> Option<Self> {
        let mut parts = data.splitn(3, ':');
        let prefix = parts.next()?;

        match prefix {
            "v" => {
                let event_id: i64 = parts.next()?.parse().ok()?;
                let choice = VoteChoice::parse(parts.next()?)?;
                Some(Self::Vote {
                    event_id: EventId::new(event_id),
                    choice,
                })
            }
            "a" => {
                let event_id: i64 = parts.next()?.parse().ok()?;
                let action = AdminAction::parse(parts.next()?)?;
                Some(Self::Admin {
                    event_id: EventId::new(event_id),
                    action,
                })
            }
            "au" => {
                let second = parts.next()?;
                if second == "cancel" {
                    return Some(Self::CancelSelect);
                }
                let event_id: i64 = second.parse().ok()?;
                let user_id: i64 = parts.next()?.parse().ok()?;
                Some(Self::SelectUser {
                    event_id: EventId::new(event_id),
                    user_id: UserId::new(user_id),
                })
            }
            "av" => {
                let choice = VoteChoice::parse(parts.next()?)?;
                Some(Self::SetVote { choice })
            }
            _ => None,
        }
    }
}

pub fn vote_data(event_id: EventId, choice: VoteChoice) -> String {
    format!("v:{event_id}:{}", choice.encode())
}

pub fn admin_data(event_id: EventId, action: AdminAction) -> String {
    format!("a:{event_id}:{}", action.encode())
}

pub fn select_user_data(event_id: EventId, user_id: UserId) -> String {
    format!("au:{event_id}:{user_id}")
}

pub fn cancel_select_data() -> String {
    "au:cancel".to_string()
}

pub fn set_vote_data(choice: VoteChoice) -> String {
    format!("av:{}", choice.encode())
}
