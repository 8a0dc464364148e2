//! Quote records.

use super::value_objects::QuoteId;

/// A stored quote.
///
/// Only a repository creates these; the id is assigned at insertion time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    /// Repository-assigned identity.
    pub id: QuoteId,
    /// The quoted text. May be empty.
    pub text: String,
    /// Who said it. May be empty; matched byte-for-byte.
    pub author: String,
}

impl Quote {
    /// Assemble a stored record from an id and the caller's payload.
    #[must_use]
    pub fn from_input(id: QuoteId, input: QuoteInput) -> Self {
        Self {
            id,
            text: input.text,
            author: input.author,
        }
    }

    /// Whether this quote is attributed to exactly `author`.
    #[must_use]
    pub fn is_by(&self, author: &str) -> bool {
        self.author == author
    }
}

/// Unvalidated creation payload. Carries no identity.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QuoteInput {
    /// The quoted text.
    pub text: String,
    /// The author.
    pub author: String,
}

impl QuoteInput {
    /// Create a payload from text and author, accepted as-is.
    #[must_use]
    pub fn new(text: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
        }
    }
}
