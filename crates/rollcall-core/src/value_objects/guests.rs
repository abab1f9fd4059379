//! Guest count value object
//!
//! A vote is always the voter plus 0-4 additional guests; the inline keyboard
//! only offers that range and anything else is rejected at the boundary.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Number of additional attendees a voter brings (0-4)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GuestCount(i32);

impl GuestCount {
    /// Largest guest count the vote keyboard offers
    pub const MAX: i32 = 4;

    /// Voting IN with no guests
    pub const NONE: GuestCount = GuestCount(0);

    /// Create a validated guest count
    pub fn new(guests: i32) -> Result<Self, DomainError> {
        if (0..=Self::MAX).contains(&guests) {
            Ok(Self(guests))
        } else {
            Err(DomainError::InvalidGuestCount(guests))
        }
    }

    /// Create a guest count clamped into the valid range.
    ///
    /// For values coming back out of storage, where the schema already
    /// enforces the range and an error path would be unreachable.
    #[inline]
    pub fn clamped(guests: i32) -> Self {
        Self(guests.clamp(0, Self::MAX))
    }

    /// Get the raw guest count
    #[inline]
    pub const fn into_inner(self) -> i32 {
        self.0
    }

    /// Seats this vote occupies: the voter plus their guests
    #[inline]
    pub const fn party_size(self) -> i64 {
        1 + self.0 as i64
    }
}

impl fmt::Display for GuestCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i32> for GuestCount {
    type Error = DomainError;

    fn try_from(guests: i32) -> Result<Self, Self::Error> {
        Self::new(guests)
    }
}
