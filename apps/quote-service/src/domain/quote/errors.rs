//! Quote repository errors.

use super::value_objects::QuoteId;

/// Failure kinds produced by a quote repository.
///
/// Every kind is terminal for the call that produced it; nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuoteError {
    /// The repository holds no quotes.
    #[error("no quotes found")]
    EmptyCollection,

    /// There is nothing to pick a random quote from.
    #[error("no quotes available")]
    NoneAvailable,

    /// No stored quote is attributed to the requested author.
    #[error("no quotes found for author {author}")]
    NoMatchForAuthor {
        /// The author that was queried.
        author: String,
    },

    /// No stored quote has the requested id.
    #[error("quote not found: {id}")]
    NotFound {
        /// The id that was requested.
        id: QuoteId,
    },
}
