//! Domain Layer
//!
//! The innermost layer containing the quote model with zero infrastructure dependencies.
//! This layer defines:
//!
//! - **Entities**: The stored `Quote` record and its creation payload
//! - **Value Objects**: Strongly-typed quote identity
//! - **Repository Traits**: The capability interface implemented by adapters
//!
//! # Bounded Contexts
//!
//! - [`quote`]: Quote records, identity assignment rules, repository contract

pub mod quote;
