//! Persistence Adapters
//!
//! Implementations of the quote repository trait.

pub mod in_memory;

pub use in_memory::InMemoryQuoteRepository;
