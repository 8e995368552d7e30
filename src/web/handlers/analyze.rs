// POST /analyze: fetch an article and return its ranked keywords.
//
// The URL is validated before the core sees it. Core failures come back as
// JSON with their classified kind.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use crate::pipeline::analyze::{analyze_url, validate_url};
use crate::web::{api_error, failure_response, AppState};

#[derive(Deserialize)]
pub struct AnalyzeRequest {
    pub url: String,
}

/// POST /analyze: run the pipeline for one URL.
pub async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Response {
    let url = match validate_url(&request.url) {
        Ok(url) => url,
        Err(message) => return api_error(StatusCode::BAD_REQUEST, &message),
    };

    match analyze_url(
        state.source.as_ref(),
        state.scorer.as_ref(),
        url.as_str(),
        state.top_k,
    )
    .await
    {
        Ok(analysis) => Json(analysis).into_response(),
        Err(e) => {
            tracing::warn!(url = url.as_str(), kind = ?e.kind(), error = %e, "Analyze failed");
            failure_response(&e)
        }
    }
}
