//! Error types for the keyword pipeline.

use std::time::Duration;

/// Failure acquiring a document.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The URL could not be parsed.
    #[error("invalid URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The request exceeded the configured timeout.
    #[error("request to {url} timed out after {}s", .timeout.as_secs_f64())]
    Timeout { url: String, timeout: Duration },

    /// The host could not be resolved or refused the connection.
    #[error("could not connect to {url}: {source}")]
    Connect {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("{status} for url: {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Any other transport failure.
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The response body could not be read as text.
    #[error("could not read response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

/// Extraction produced no usable text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("no text found in the article")]
pub struct EmptyContentError;

/// Failure of a whole pipeline run.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// The fetch stage failed.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The extraction stage yielded no text.
    #[error(transparent)]
    EmptyContent(#[from] EmptyContentError),

    /// The configured token pattern is not a valid regular expression.
    #[error("invalid token pattern: {0}")]
    InvalidTokenPattern(#[from] regex::Error),
}

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;
