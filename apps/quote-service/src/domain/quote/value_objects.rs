//! Quote identity.
//!
//! Ids are positive integers minted by the repository, starting at 1.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Unique identifier of a stored quote.
///
/// Never zero. Assigned in strictly increasing order and never reused within
/// the lifetime of a repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuoteId(u64);

impl QuoteId {
    /// The first id a fresh repository hands out.
    pub const FIRST: Self = Self(1);

    /// Create an id from a raw value.
    ///
    /// Returns `None` for zero, which is never a valid id.
    #[must_use]
    pub const fn new(value: u64) -> Option<Self> {
        if value == 0 { None } else { Some(Self(value)) }
    }

    /// Get the raw integer value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// The id that follows this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for QuoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned when text cannot be read as a [`QuoteId`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidQuoteId {
    /// The text is not a non-negative integer.
    #[error("invalid quote id '{0}': not a positive integer")]
    Malformed(String),
    /// Zero is reserved and never assigned.
    #[error("invalid quote id '0': ids start at 1")]
    Zero,
}

impl FromStr for QuoteId {
    type Err = InvalidQuoteId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw: u64 = s
            .parse()
            .map_err(|_| InvalidQuoteId::Malformed(s.to_string()))?;
        Self::new(raw).ok_or(InvalidQuoteId::Zero)
    }
}
