//! Application Layer
//!
//! Data transfer objects that carry quotes across the API boundary.

/// Wire representations of quotes.
pub mod dto;
