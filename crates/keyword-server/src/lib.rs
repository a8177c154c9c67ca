//! keyword-server: HTTP API server for article keyword extraction.
//!
//! This crate provides:
//! - `POST /analyze`: ranked TF-IDF keywords for an article URL
//! - `GET /health`: liveness check
//!
//! # Architecture
//!
//! The server is built on Axum with a middleware stack for:
//! - Request tracing and logging
//! - Fully permissive CORS (browser frontends call it directly)
//! - Request ID generation (UUID, echoed in `x-request-id`)
//! - JSON error responses
//!
//! # Usage
//!
//! ```rust,ignore
//! use keyword_server::{build_app, config::ServerConfig, state::AppState};
//!
//! let config = ServerConfig::from_env()?;
//! let state = AppState::new(PipelineConfig::default(), config)?;
//! axum::serve(listener, build_app(state)).await?;
//! ```

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use axum::Router;
use http::HeaderName;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

pub use config::{ConfigError, ServerConfig};
pub use error::{ApiError, ApiResult};
pub use state::AppState;

pub use keyword_core;
pub use keyword_pipeline;

/// Header carrying the per-request UUID, echoed back on the response.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Builds the router with the full middleware stack.
///
/// Incoming `x-request-id` values are kept; requests without one get a UUID.
pub fn build_app(state: AppState) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);
    routes::build_router(state)
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
}

/// Any origin, method and header is allowed.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
