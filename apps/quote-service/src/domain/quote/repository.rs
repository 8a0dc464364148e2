//! Quote Repository Trait
//!
//! Defines the capability interface the HTTP layer depends on.
//! Implemented by adapters in the infrastructure layer.

use async_trait::async_trait;

use super::entity::{Quote, QuoteInput};
use super::errors::QuoteError;
use super::value_objects::QuoteId;

/// Repository trait for quote storage.
///
/// Implementations must be safe to call concurrently and must serialize
/// operations so that no caller observes a half-applied change. Returned
/// quotes are copies; mutating them never affects stored state.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuoteRepository: Send + Sync {
    /// Store a new quote, assigning it the next id.
    ///
    /// # Errors
    ///
    /// The in-memory adapter never fails; the `Result` is part of the contract.
    async fn add(&self, input: QuoteInput) -> Result<Quote, QuoteError>;

    /// All stored quotes in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `QuoteError::EmptyCollection` if nothing is stored.
    async fn get_all(&self) -> Result<Vec<Quote>, QuoteError>;

    /// One stored quote chosen uniformly at random.
    ///
    /// # Errors
    ///
    /// Returns `QuoteError::NoneAvailable` if nothing is stored.
    async fn get_random(&self) -> Result<Quote, QuoteError>;

    /// Quotes whose author equals `author` exactly, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `QuoteError::NoMatchForAuthor` if nothing matches.
    async fn get_by_author(&self, author: &str) -> Result<Vec<Quote>, QuoteError>;

    /// Remove the quote with `id` and return it.
    ///
    /// # Errors
    ///
    /// Returns `QuoteError::NotFound` if no quote has that id.
    async fn delete_by_id(&self, id: QuoteId) -> Result<Quote, QuoteError>;

    /// Number of quotes currently stored.
    async fn count(&self) -> usize;
}
