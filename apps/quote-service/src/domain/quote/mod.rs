//! Quote Bounded Context
//!
//! A quote is a piece of text attributed to an author. Quotes are created
//! only through a repository, which is the sole authority for minting ids,
//! and destroyed only by deleting them by id. There is no update.

pub mod entity;
pub mod errors;
pub mod repository;
pub mod value_objects;

pub use entity::{Quote, QuoteInput};
pub use errors::QuoteError;
pub use repository::QuoteRepository;
pub use value_objects::{InvalidQuoteId, QuoteId};
