// Web server: thin Axum wrapper around the analyze pipeline.
//
// POST /analyze takes {"url": "..."} and answers with the ranked keyword
// list. Core failures map to status codes through FailureKind, never by
// matching on error messages. CORS is limited to the configured frontend
// origins.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::article::fetcher::{ArticleFetcher, ArticleSource};
use crate::config::Config;
use crate::error::AnalyzeError;
use crate::keywords::traits::KeywordScorer;

pub mod handlers;

/// Shared application state threaded through all Axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn ArticleSource>,
    pub scorer: Arc<dyn KeywordScorer>,
    pub top_k: usize,
}

/// Start the Axum web server and block until it exits.
pub async fn run_server(config: Config, port: u16, bind: &str) -> Result<()> {
    let fetcher = ArticleFetcher::new(config.fetch_options())?;
    let stopwords = Arc::new(config.stopwords());
    info!(stopwords = stopwords.len(), "Loaded stopword list");

    let state = AppState {
        source: Arc::new(fetcher),
        scorer: Arc::new(config.scorer(stopwords)),
        top_k: config.top_k,
    };

    let app = build_router(state, &config.allowed_origins);

    let addr = format!("{bind}:{port}");
    info!("Wordcloud API listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_router(state: AppState, allowed_origins: &[String]) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/analyze", post(handlers::analyze::analyze))
        .layer(cors_layer(allowed_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = origin.as_str(), "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Health check: always returns 200 OK.
async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        axum::Json(serde_json::json!({ "status": "ok" })),
    )
}

/// Typed JSON error response helper.
pub fn api_error(status: StatusCode, message: &str) -> Response {
    (status, axum::Json(serde_json::json!({ "error": message }))).into_response()
}

/// JSON response for a classified pipeline failure.
pub fn failure_response(err: &AnalyzeError) -> Response {
    let kind = err.kind();
    let status =
        StatusCode::from_u16(kind.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        axum::Json(serde_json::json!({
            "error": err.to_string(),
            "kind": kind,
            "status": err.status(),
        })),
    )
        .into_response()
}
