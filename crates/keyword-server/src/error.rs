//! API error types with JSON responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use keyword_pipeline::PipelineError;
use serde::{Deserialize, Serialize};

/// API error that can be returned from handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The article could not be fetched (500).
    #[error("Failed to fetch article: {0}")]
    FetchFailed(String),

    /// The article had no extractable text (422).
    #[error("No text found in the article")]
    EmptyContent,

    /// The request body was malformed (422).
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Internal server error (500).
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Get the error code string for this error.
    pub fn code(&self) -> &'static str {
        match self {
            Self::FetchFailed(_) => "FETCH_FAILED",
            Self::EmptyContent => "EMPTY_CONTENT",
            Self::InvalidRequest(_) => "INVALID_REQUEST",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::FetchFailed(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::EmptyContent | Self::InvalidRequest(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl From<PipelineError> for ApiError {
    fn from(err: PipelineError) -> Self {
        match err {
            PipelineError::Fetch(e) => Self::FetchFailed(e.to_string()),
            PipelineError::EmptyContent(_) => Self::EmptyContent,
            other => Self::Internal(other.to_string()),
        }
    }
}

/// JSON error response body.
///
/// `detail` is the field browser clients display.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub detail: String,
    /// Error code (e.g., "FETCH_FAILED", "EMPTY_CONTENT").
    pub code: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::warn!(code = self.code(), error = %self, "request failed");
        }
        let body = ErrorResponse {
            detail: self.to_string(),
            code: self.code().to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;
