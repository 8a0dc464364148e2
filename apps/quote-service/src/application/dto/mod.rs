//! Data Transfer Objects
//!
//! JSON shapes for the HTTP API. Field names are `id`, `quote` and `author`.

mod quote_dto;

pub use quote_dto::{CreateQuoteDto, QuoteDto};
