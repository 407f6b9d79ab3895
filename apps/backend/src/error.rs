//! Error handling for the backend API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use flashcard_core::QuizError;
use serde::Serialize;
use thiserror::Error;

use crate::services::speech::SynthesisError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Quiz precondition failed: {0}")]
    Quiz(#[from] QuizError),

    #[error("Cards unavailable: {0}")]
    CardsUnavailable(String),

    #[error("No audio: {0}")]
    Synthesis(#[from] SynthesisError),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            ApiError::Conflict(_) => (StatusCode::CONFLICT, "conflict"),
            ApiError::Quiz(_) => (StatusCode::CONFLICT, "precondition_failed"),
            ApiError::CardsUnavailable(_) => {
                (StatusCode::SERVICE_UNAVAILABLE, "cards_unavailable")
            }
            ApiError::Synthesis(_) => (StatusCode::BAD_GATEWAY, "synthesis_failed"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        };

        match status {
            StatusCode::BAD_GATEWAY => tracing::warn!("{}", self),
            StatusCode::INTERNAL_SERVER_ERROR => tracing::error!("{}", self),
            _ => {}
        }

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}

/// Result type alias for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
