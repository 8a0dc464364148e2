//! HTTP Controller (Driver Adapter)
//!
//! Axum-based REST API over a `QuoteRepository`.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get},
};
use chrono::Utc;

use crate::application::dto::{CreateQuoteDto, QuoteDto};
use crate::domain::quote::{QuoteId, QuoteRepository};
use crate::infrastructure::metrics::get_metrics_handle;

use super::error::ApiError;
use super::request::AuthorQuery;
use super::response::HealthResponse;

/// Application state shared across handlers.
pub struct AppState<R: QuoteRepository> {
    /// Quote storage.
    pub repo: Arc<R>,
    /// Application version.
    pub version: String,
    /// When the state was created.
    pub started_at: Instant,
}

impl<R: QuoteRepository> AppState<R> {
    /// Create state around a shared repository.
    #[must_use]
    pub fn new(repo: Arc<R>, version: impl Into<String>) -> Self {
        Self {
            repo,
            version: version.into(),
            started_at: Instant::now(),
        }
    }
}

impl<R: QuoteRepository> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
            version: self.version.clone(),
            started_at: self.started_at,
        }
    }
}

/// Create the HTTP router with all endpoints.
pub fn create_router<R>(state: AppState<R>) -> Router
where
    R: QuoteRepository + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .route("/healthz", get(liveness))
        .route("/metrics", get(metrics_handler))
        .route("/quotes", get(list_quotes).post(create_quote))
        .route("/quotes/random", get(random_quote))
        .route("/quotes/{id}", delete(delete_quote))
        .with_state(state)
}

/// Health check endpoint.
async fn health_check<R: QuoteRepository>(State(state): State<AppState<R>>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
        uptime_secs: state.started_at.elapsed().as_secs(),
        current_time: Utc::now(),
        quote_count: state.repo.count().await,
    })
}

async fn liveness() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

async fn metrics_handler() -> impl IntoResponse {
    get_metrics_handle().map_or_else(
        || {
            (
                StatusCode::SERVICE_UNAVAILABLE,
                [("content-type", "text/plain")],
                "Metrics not initialized".to_string(),
            )
        },
        |handle| {
            (
                StatusCode::OK,
                [("content-type", "text/plain; version=0.0.4; charset=utf-8")],
                handle.render(),
            )
        },
    )
}

/// Create a quote from a JSON body.
async fn create_quote<R: QuoteRepository>(
    State(state): State<AppState<R>>,
    payload: Result<Json<CreateQuoteDto>, JsonRejection>,
) -> Result<(StatusCode, Json<QuoteDto>), ApiError> {
    let Json(dto) = payload.map_err(|rejection| match rejection {
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::UnsupportedMediaType("Content-Type must be application/json".to_string())
        }
        other => ApiError::InvalidInput(other.body_text()),
    })?;

    let quote = state
        .repo
        .add(dto.into_input())
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    tracing::info!(id = %quote.id, author = %quote.author, "Quote created");

    Ok((StatusCode::CREATED, Json(QuoteDto::from(quote))))
}

/// List every quote, or only those by `?author=`.
async fn list_quotes<R: QuoteRepository>(
    State(state): State<AppState<R>>,
    query: Result<Query<AuthorQuery>, QueryRejection>,
) -> Result<Json<Vec<QuoteDto>>, ApiError> {
    let Query(query) = query.map_err(|rejection| ApiError::InvalidInput(rejection.body_text()))?;

    let quotes = match query.author.as_deref() {
        None => state.repo.get_all().await?,
        Some("") => {
            return Err(ApiError::InvalidInput(
                "author parameter is required".to_string(),
            ));
        }
        Some(author) => state.repo.get_by_author(author).await?,
    };

    Ok(Json(quotes.into_iter().map(QuoteDto::from).collect()))
}

async fn random_quote<R: QuoteRepository>(
    State(state): State<AppState<R>>,
) -> Result<Json<QuoteDto>, ApiError> {
    let quote = state.repo.get_random().await?;
    Ok(Json(QuoteDto::from(quote)))
}

/// Delete a quote by id. The id is validated before the repository is touched.
async fn delete_quote<R: QuoteRepository>(
    State(state): State<AppState<R>>,
    Path(raw_id): Path<String>,
) -> Result<Json<QuoteDto>, ApiError> {
    let id = raw_id
        .parse::<QuoteId>()
        .map_err(|e| ApiError::InvalidInput(e.to_string()))?;

    let quote = state.repo.delete_by_id(id).await?;
    tracing::info!(id = %quote.id, "Quote deleted");

    Ok(Json(QuoteDto::from(quote)))
}
