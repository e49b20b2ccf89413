//! Error types for the web API.
//!
//! Policy: only structurally invalid requests get hard 4xx errors with a
//! descriptive message; upstream and storage failures are logged in full
//! server-side and reach the caller as a generic message. Response bodies
//! are always `{"error": message}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use guide::GuideError;
use thiserror::Error;
use tours::TourError;

/// User-facing apology for a missing tour on the assistant endpoint.
pub const TOUR_NOT_FOUND_TEXT: &str = "Извините, этот тур не найден.";

/// Errors that can occur while handling an API request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Structurally invalid request (missing or conflicting fields).
    #[error("{0}")]
    BadRequest(String),

    /// Requested entity does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Chat backend failed; the message is already generic.
    #[error("{0}")]
    Upstream(String),

    /// Database error.
    #[error("database error: {0}")]
    Database(#[from] database::DatabaseError),

    /// Tour registry error.
    #[error("tour error: {0}")]
    Tour(#[from] TourError),
}

impl From<GuideError> for ApiError {
    fn from(err: GuideError) -> Self {
        match err {
            GuideError::TourNotFound { .. } => ApiError::NotFound(TOUR_NOT_FOUND_TEXT.to_string()),
            // InvalidId gets the same user-facing treatment as absent
            GuideError::Tour(TourError::InvalidId { .. }) => {
                ApiError::NotFound(TOUR_NOT_FOUND_TEXT.to_string())
            }
            GuideError::Tour(inner) => ApiError::Tour(inner),
            GuideError::Upstream => ApiError::Upstream("AI request failed".to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            ApiError::Upstream(msg) => {
                tracing::error!("Upstream failure: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
            ApiError::Database(err) => {
                tracing::error!("Database error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal error".to_string(),
                )
            }
            ApiError::Tour(TourError::InvalidId { .. }) => {
                (StatusCode::NOT_FOUND, "not found".to_string())
            }
            ApiError::Tour(err) => {
                tracing::error!("Tour registry error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal error".to_string(),
                )
            }
        };

        let body = serde_json::json!({
            "error": message
        });

        (status, Json(body)).into_response()
    }
}

/// Result type for API handlers.
pub type Result<T> = std::result::Result<T, ApiError>;
