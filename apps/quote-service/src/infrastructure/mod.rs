//! Infrastructure Layer - Adapters and external integrations.
//!
//! Concrete implementations of the domain's repository trait plus the HTTP
//! surface and process-level plumbing.

/// Quote storage adapters.
pub mod persistence;

/// HTTP/REST API adapter.
pub mod http;

/// Environment-driven configuration.
pub mod config;

/// Prometheus metrics instrumentation.
pub mod metrics;

/// Tracing subscriber and OpenTelemetry integration.
pub mod telemetry;
