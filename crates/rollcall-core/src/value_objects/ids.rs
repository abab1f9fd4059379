//! Typed identifiers
//!
//! Telegram hands us raw 64-bit integers for chats, users, and messages;
//! event ids come from the database sequence. Wrapping each in its own
//! newtype keeps them from being swapped at call sites.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error when parsing a typed id from a string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IdParseError {
    #[error("invalid id format")]
    InvalidFormat,
}

macro_rules! id_type {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default,
            Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Create from a raw i64 value
            #[inline]
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            /// Get the inner i64 value
            #[inline]
            pub const fn into_inner(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = IdParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse::<i64>()
                    .map($name)
                    .map_err(|_| IdParseError::InvalidFormat)
            }
        }
    };
}

id_type! {
    /// Database-assigned event identifier
    EventId
}

id_type! {
    /// Telegram chat identifier (negative for groups)
    ChatId
}

id_type! {
    /// Telegram user identifier
    UserId
}

id_type! {
    /// Telegram message identifier, scoped to a chat
    MessageId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_roundtrip() {
        let id = EventId::new(42);
        assert_eq!(id.into_inner(), 42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn test_id_parse() {
        let id: EventId = "17".parse().unwrap();
        assert_eq!(id, EventId::new(17));

        assert!("not-a-number".parse::<EventId>().is_err());
    }

    #[test]
    fn test_chat_id_negative_groups() {
        let id: ChatId = "-1001234567".parse().unwrap();
        assert_eq!(id.into_inner(), -1001234567);
    }

    #[test]
    fn test_id_serde_transparent() {
        let id = UserId::new(99);
        assert_eq!(serde_json::to_string(&id).unwrap(), "99");

        let back: UserId = serde_json::from_str("99").unwrap();
        assert_eq!(back, id);
    }
}
