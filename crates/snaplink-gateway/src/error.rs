use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use snaplink_assigner::AssignError;
use snaplink_core::StorageError;
use thiserror::Error;
use tracing::error;

pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors surfaced to HTTP clients as a status code plus a JSON body of
/// the form `{ "error": "<message>" }`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("shortcode already exists: {0}")]
    Conflict(String),
    #[error("short URL not found")]
    NotFound,
    #[error("short URL has expired")]
    Gone,
    #[error("server error")]
    Internal(#[source] StorageError),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl From<AssignError> for ApiError {
    fn from(value: AssignError) -> Self {
        match value {
            AssignError::Validation(message) => Self::BadRequest(message),
            AssignError::Conflict(code) => Self::Conflict(code),
            AssignError::Storage(err) => Self::Internal(err),
        }
    }
}

impl From<StorageError> for ApiError {
    fn from(value: StorageError) -> Self {
        Self::Internal(value)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(source) = &self {
            // The storage detail goes to the log, not to the client.
            error!(error = %source, "storage failure while serving request");
        }

        let status = match &self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Gone => StatusCode::GONE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = ErrorBody {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
