//! In-memory quote repository.
//!
//! The quote list, the id counter and the random generator live together
//! behind a single mutex, so "assign id, then append" is one atomic step and
//! every operation sees a consistent snapshot. The stored-quotes gauge is
//! written under the same lock so it always matches the last change. The lock
//! is never held across an await point or any I/O.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::quote::{Quote, QuoteError, QuoteId, QuoteInput, QuoteRepository};
use crate::infrastructure::metrics::{self, Operation, Outcome};

/// State guarded by the repository lock.
struct QuoteStore<R> {
    quotes: Vec<Quote>,
    next_id: QuoteId,
    rng: R,
}

/// In-memory implementation of `QuoteRepository`.
///
/// Volatile: everything is lost when the value is dropped. Generic over the
/// random source so tests can inject a seeded generator.
pub struct InMemoryQuoteRepository<R = StdRng> {
    state: Mutex<QuoteStore<R>>,
}

impl InMemoryQuoteRepository<StdRng> {
    /// Create an empty repository with a generator seeded from the clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(clock_seed())
    }

    /// Create an empty repository with a deterministic generator.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for InMemoryQuoteRepository<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng + Send> InMemoryQuoteRepository<R> {
    /// Create an empty repository that draws random picks from `rng`.
    #[must_use]
    pub fn with_rng(rng: R) -> Self {
        Self {
            state: Mutex::new(QuoteStore {
                quotes: Vec::new(),
                next_id: QuoteId::FIRST,
                rng,
            }),
        }
    }

    /// Number of quotes currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.lock().quotes.len()
    }

    /// Whether the repository holds no quotes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.lock().quotes.is_empty()
    }
}

impl<R> fmt::Debug for InMemoryQuoteRepository<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("InMemoryQuoteRepository")
            .field("len", &state.quotes.len())
            .field("next_id", &state.next_id)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl<R: Rng + Send> QuoteRepository for InMemoryQuoteRepository<R> {
    async fn add(&self, input: QuoteInput) -> Result<Quote, QuoteError> {
        let quote = {
            let mut state = self.state.lock();
            let quote = Quote::from_input(state.next_id, input);
            state.next_id = state.next_id.next();
            state.quotes.push(quote.clone());
            metrics::set_quotes_stored(state.quotes.len());
            quote
        };

        tracing::debug!(id = %quote.id, author = %quote.author, "Quote added");
        metrics::record_operation(Operation::Add, Outcome::Ok);
        Ok(quote)
    }

    async fn get_all(&self) -> Result<Vec<Quote>, QuoteError> {
        let quotes = self.state.lock().quotes.clone();

        if quotes.is_empty() {
            metrics::record_operation(Operation::GetAll, Outcome::Empty);
            return Err(QuoteError::EmptyCollection);
        }

        tracing::debug!(count = quotes.len(), "Quotes listed");
        metrics::record_operation(Operation::GetAll, Outcome::Ok);
        Ok(quotes)
    }

    async fn get_random(&self) -> Result<Quote, QuoteError> {
        let picked = {
            let mut guard = self.state.lock();
            let state = &mut *guard;
            if state.quotes.is_empty() {
                None
            } else {
                let index = state.rng.random_range(0..state.quotes.len());
                Some(state.quotes[index].clone())
            }
        };

        picked.map_or_else(
            || {
                metrics::record_operation(Operation::GetRandom, Outcome::Empty);
                Err(QuoteError::NoneAvailable)
            },
            |quote| {
                tracing::debug!(id = %quote.id, "Random quote picked");
                metrics::record_operation(Operation::GetRandom, Outcome::Ok);
                Ok(quote)
            },
        )
    }

    async fn get_by_author(&self, author: &str) -> Result<Vec<Quote>, QuoteError> {
        let matches: Vec<Quote> = self
            .state
            .lock()
            .quotes
            .iter()
            .filter(|q| q.is_by(author))
            .cloned()
            .collect();

        tracing::debug!(author, count = matches.len(), "Quotes filtered by author");

        if matches.is_empty() {
            metrics::record_operation(Operation::GetByAuthor, Outcome::Empty);
            return Err(QuoteError::NoMatchForAuthor {
                author: author.to_string(),
            });
        }

        metrics::record_operation(Operation::GetByAuthor, Outcome::Ok);
        Ok(matches)
    }

    async fn delete_by_id(&self, id: QuoteId) -> Result<Quote, QuoteError> {
        let removed = {
            let mut state = self.state.lock();
            let position = state.quotes.iter().position(|q| q.id == id);
            let quote = position.map(|index| state.quotes.remove(index));
            if quote.is_some() {
                metrics::set_quotes_stored(state.quotes.len());
            }
            quote
        };

        let Some(quote) = removed else {
            metrics::record_operation(Operation::DeleteById, Outcome::Empty);
            return Err(QuoteError::NotFound { id });
        };

        tracing::debug!(id = %quote.id, "Quote deleted");
        metrics::record_operation(Operation::DeleteById, Outcome::Ok);
        Ok(quote)
    }

    async fn count(&self) -> usize {
        self.len()
    }
}

/// Seed derived from the wall clock at nanosecond resolution.
#[allow(clippy::cast_possible_truncation)]
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}
