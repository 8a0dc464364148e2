//! HTTP/REST API adapter.
//!
//! Inbound adapter exposing the quote repository over JSON endpoints.

mod controller;
mod error;
mod request;
mod response;

pub use controller::{AppState, create_router};
pub use error::ApiError;
pub use request::*;
pub use response::*;
