//! Quote Service Binary
//!
//! Starts the HTTP server over a fresh, empty in-memory repository.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin quote-service
//! ```
//!
//! # Environment Variables
//!
//! - `QUOTE_SERVICE_HOST`: Interface to bind (default: 0.0.0.0)
//! - `QUOTE_SERVICE_PORT`: Port to bind (default: 8080)
//! - `QUOTE_SERVICE_RNG_SEED`: Fixed seed for `/quotes/random` (default: clock)
//! - `OTEL_ENABLED`: Enable OpenTelemetry export (default: false)
//! - `OTEL_EXPORTER_OTLP_ENDPOINT`: OTLP endpoint (default: <http://localhost:4317>)
//! - `OTEL_SERVICE_NAME`: Service name (default: quote-service)
//! - `RUST_LOG`: Log level (default: info)

use std::sync::Arc;

use quote_service::infrastructure::telemetry;
use quote_service::{
    AppState, InMemoryQuoteRepository, ServerError, ServiceConfig, create_router, init_metrics,
};
use tokio::signal;
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    load_dotenv();

    // Initialize telemetry (tracing + optional OTLP)
    let telemetry_guard = telemetry::init();

    tracing::info!(
        otlp_export = telemetry_guard.is_exporting(),
        "Starting Quote Service"
    );

    if let Err(e) = init_metrics() {
        tracing::warn!(error = %e, "Prometheus recorder not installed, /metrics disabled");
    }

    let config = ServiceConfig::from_env().map_err(ServerError::from)?;
    log_config(&config);

    let repo = Arc::new(config.rng_seed.map_or_else(
        InMemoryQuoteRepository::new,
        InMemoryQuoteRepository::with_seed,
    ));
    let state = AppState::new(repo, env!("CARGO_PKG_VERSION"));
    let app = create_router(state);

    let addr = config.server.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    tracing::info!(addr = %addr, "HTTP server listening");

    let shutdown_token = CancellationToken::new();
    tokio::spawn(await_shutdown(shutdown_token.clone()));

    axum::serve(listener, app)
        .with_graceful_shutdown(async move { shutdown_token.cancelled().await })
        .await
        .map_err(ServerError::Serve)?;

    tracing::info!("Quote Service stopped");
    Ok(())
}

/// Load .env file from current or ancestor directories.
fn load_dotenv() {
    if dotenvy::dotenv().is_err() {
        load_dotenv_from_ancestors();
    }
}

/// Log the parsed configuration.
fn log_config(config: &ServiceConfig) {
    tracing::info!(
        host = %config.server.host,
        port = config.server.port,
        seeded = config.rng_seed.is_some(),
        "Configuration loaded"
    );
}

/// Load .env file from any ancestor directory.
fn load_dotenv_from_ancestors() {
    if let Ok(cwd) = std::env::current_dir() {
        let mut dir = cwd.as_path();
        while let Some(parent) = dir.parent() {
            let env_path = parent.join(".env");
            if env_path.exists() {
                let _ = dotenvy::from_path(&env_path);
                return;
            }
            dir = parent;
        }
    }
}

/// Wait for shutdown signal (SIGTERM or SIGINT), then cancel the token.
#[allow(clippy::expect_used)]
async fn await_shutdown(shutdown_token: CancellationToken) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("signal handler installation is critical for graceful shutdown");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("SIGTERM handler installation is critical for graceful shutdown")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, initiating shutdown");
        }
    }

    shutdown_token.cancel();
    tracing::info!("Graceful shutdown started");
}
