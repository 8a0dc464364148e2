//! Quote DTOs

use serde::{Deserialize, Serialize};

use crate::domain::quote::{Quote, QuoteInput};

/// DTO for creating a quote.
///
/// Missing fields default to empty strings; no other validation is applied.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CreateQuoteDto {
    /// Quote text.
    #[serde(default)]
    pub quote: String,
    /// Author.
    #[serde(default)]
    pub author: String,
}

impl CreateQuoteDto {
    /// Convert to the domain payload.
    #[must_use]
    pub fn into_input(self) -> QuoteInput {
        QuoteInput {
            text: self.quote,
            author: self.author,
        }
    }
}

/// DTO representing a stored quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteDto {
    /// Quote ID.
    pub id: u64,
    /// Quote text.
    pub quote: String,
    /// Author.
    pub author: String,
}

impl From<Quote> for QuoteDto {
    fn from(quote: Quote) -> Self {
        Self {
            id: quote.id.value(),
            quote: quote.text,
            author: quote.author,
        }
    }
}
