#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::significant_drop_tightening,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::items_after_statements
    )
)]

//! Quote Service - In-Memory Quote Repository over HTTP
//!
//! Stores short quotations attributed to authors and serves them over a JSON
//! REST API. Storage is volatile: everything lives in process memory.
//!
//! # Layers (inside → outside)
//!
//! - **Domain**: Quote entity, identifiers, errors and the repository trait
//!   - `quote`: `Quote`, `QuoteInput`, `QuoteId`, `QuoteError`, `QuoteRepository`
//!
//! - **Application**: Wire DTOs
//!   - `dto`: `CreateQuoteDto`, `QuoteDto`
//!
//! - **Infrastructure**: Adapters and process plumbing
//!   - `persistence`: Mutex-guarded in-memory repository
//!   - `http`: Axum router, handlers and error mapping
//!   - `config`: Environment-driven settings
//!   - `metrics`: Prometheus recorder and repository counters
//!   - `telemetry`: Tracing subscriber with optional OTLP export
//!
//! # Endpoints
//!
//! ```text
//! POST   /quotes            create (201)
//! GET    /quotes[?author=]  list all, or by exact author
//! GET    /quotes/random     one quote chosen uniformly
//! DELETE /quotes/{id}       remove by id
//! GET    /health, /healthz, /metrics
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Module Declarations
// =============================================================================

/// Domain layer - Quote types and the repository trait.
pub mod domain;

/// Application layer - Request and response DTOs.
pub mod application;

/// Infrastructure layer - Storage, HTTP, configuration and observability.
pub mod infrastructure;

/// Process-level errors.
pub mod error;

// =============================================================================
// Re-exports
// =============================================================================

// Domain types
pub use domain::quote::{InvalidQuoteId, Quote, QuoteError, QuoteId, QuoteInput, QuoteRepository};

// Application DTOs
pub use application::dto::{CreateQuoteDto, QuoteDto};

// Infrastructure
pub use infrastructure::config::{ConfigError, ServerSettings, ServiceConfig};
pub use infrastructure::http::{ApiError, AppState, create_router};
pub use infrastructure::metrics::{get_metrics_handle, init_metrics};
pub use infrastructure::persistence::InMemoryQuoteRepository;

// Errors
pub use error::ServerError;
