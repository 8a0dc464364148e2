//! Mapping from failures to HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::domain::quote::QuoteError;

use super::response::ErrorResponse;

/// Error returned by HTTP handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The repository reported a failure.
    #[error(transparent)]
    Repository(#[from] QuoteError),

    /// The request could not be decoded or a parameter is invalid.
    #[error("{0}")]
    InvalidInput(String),

    /// The request body is not declared as JSON.
    #[error("{0}")]
    UnsupportedMediaType(String),

    /// A write the repository could not complete.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Repository(
                QuoteError::EmptyCollection
                | QuoteError::NoneAvailable
                | QuoteError::NoMatchForAuthor { .. }
                | QuoteError::NotFound { .. },
            ) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %message, "Request failed");
        } else {
            tracing::warn!(status = status.as_u16(), error = %message, "Request rejected");
        }

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}
