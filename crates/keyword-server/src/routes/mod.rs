//! Route definitions for the HTTP API.
//!
//! - `POST /analyze`: see [`analyze`]
//! - `GET /health`: `{ "status": "ok" }` while the process is serving

pub mod analyze;

use axum::{Json, Router, routing::get};
use serde_json::{Value, json};

use crate::state::AppState;

/// Build the complete router with all routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(analyze::routes())
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
