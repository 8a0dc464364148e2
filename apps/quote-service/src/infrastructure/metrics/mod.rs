//! Prometheus Metrics Module
//!
//! Exposes repository activity in Prometheus format.
//!
//! # Metrics
//!
//! - `quote_service_operations_total{operation, outcome}`: repository calls
//! - `quote_service_quotes_stored`: quotes currently held
//!
//! Metrics are exposed at `/metrics` on the HTTP port. Recording before
//! [`init_metrics`] is a no-op.

use std::sync::OnceLock;

use metrics::{counter, describe_counter, describe_gauge, gauge};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};

static PROMETHEUS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Install the Prometheus recorder and return its handle.
///
/// Safe to call more than once; later calls return the first handle.
///
/// # Errors
///
/// Returns `BuildError` if another global recorder is already installed.
pub fn init_metrics() -> Result<PrometheusHandle, BuildError> {
    if let Some(handle) = PROMETHEUS_HANDLE.get() {
        return Ok(handle.clone());
    }

    let handle = PrometheusBuilder::new().install_recorder()?;
    register_metrics();
    Ok(PROMETHEUS_HANDLE.get_or_init(|| handle).clone())
}

/// Get the Prometheus handle for rendering metrics.
///
/// Returns `None` if metrics have not been initialized.
#[must_use]
pub fn get_metrics_handle() -> Option<PrometheusHandle> {
    PROMETHEUS_HANDLE.get().cloned()
}

fn register_metrics() {
    describe_counter!(
        "quote_service_operations_total",
        "Total repository operations by operation and outcome"
    );
    describe_gauge!(
        "quote_service_quotes_stored",
        "Number of quotes currently stored"
    );
}

/// Repository operation label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Insert a quote.
    Add,
    /// List all quotes.
    GetAll,
    /// Pick one quote at random.
    GetRandom,
    /// List quotes by author.
    GetByAuthor,
    /// Delete a quote by id.
    DeleteById,
}

impl Operation {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::GetAll => "get_all",
            Self::GetRandom => "get_random",
            Self::GetByAuthor => "get_by_author",
            Self::DeleteById => "delete_by_id",
        }
    }
}

/// Operation outcome label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The operation returned a value.
    Ok,
    /// Nothing matched (empty collection, unknown author or id).
    Empty,
}

impl Outcome {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Empty => "empty",
        }
    }
}

/// Record one repository operation.
pub fn record_operation(operation: Operation, outcome: Outcome) {
    counter!(
        "quote_service_operations_total",
        "operation" => operation.as_str(),
        "outcome" => outcome.as_str()
    )
    .increment(1);
}

/// Update the stored-quotes gauge.
#[allow(clippy::cast_precision_loss)]
pub fn set_quotes_stored(count: usize) {
    gauge!("quote_service_quotes_stored").set(count as f64);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operation_as_str() {
        assert_eq!(Operation::Add.as_str(), "add");
        assert_eq!(Operation::GetAll.as_str(), "get_all");
        assert_eq!(Operation::GetRandom.as_str(), "get_random");
        assert_eq!(Operation::GetByAuthor.as_str(), "get_by_author");
        assert_eq!(Operation::DeleteById.as_str(), "delete_by_id");
    }

    #[test]
    fn outcome_as_str() {
        assert_eq!(Outcome::Ok.as_str(), "ok");
        assert_eq!(Outcome::Empty.as_str(), "empty");
    }

    #[test]
    fn recording_without_recorder_is_noop() {
        record_operation(Operation::Add, Outcome::Ok);
        set_quotes_stored(3);
    }
}
