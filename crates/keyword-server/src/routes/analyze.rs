//! Keyword analysis endpoint.
//!
//! `POST /analyze` takes `{ "url": string }` and returns the article's
//! keywords as `[{ "word": string, "weight": number }]`, heaviest first.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::post,
};
use keyword_core::{AnalyzeRequest, KeywordRecord};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// POST /analyze - Extract ranked keywords from an article.
async fn analyze(
    State(state): State<AppState>,
    body: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> ApiResult<Json<Vec<KeywordRecord>>> {
    let Json(request) = body.map_err(|e| ApiError::InvalidRequest(e.body_text()))?;

    tracing::debug!(url = %request.url, "analyze requested");
    let keywords = state.pipeline().analyze(&request.url).await?;

    Ok(Json(keywords))
}

/// Build analysis routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/analyze", post(analyze))
}
