// HTTP article fetcher.
//
// One GET per call with a bounded timeout and a browser-like user agent
// (plenty of news sites reject default client identifiers). Failures are
// classified by cause rather than passed through as raw transport errors.
// No retries and no caching; retry policy belongs to the caller.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info, warn};

use super::extract::extract_text_from_html;
use crate::error::AnalyzeError;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_MIN_TEXT_CHARS: usize = 100;
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

/// Knobs for fetching and validating an article.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Upper bound on the whole request, body included.
    pub timeout: Duration,
    pub user_agent: String,
    /// Extracted text shorter than this (in characters) is rejected as
    /// unreadable.
    pub min_text_chars: usize,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            min_text_chars: DEFAULT_MIN_TEXT_CHARS,
        }
    }
}

/// Anything that can turn a URL into article text.
///
/// The pipeline depends on this trait so it can be driven by a canned
/// source in tests.
#[async_trait]
pub trait ArticleSource: Send + Sync {
    async fn fetch_text(&self, url: &str) -> Result<String, AnalyzeError>;
}

/// Fetches articles over HTTP and extracts their body text.
pub struct ArticleFetcher {
    client: Client,
    options: FetchOptions,
}

impl ArticleFetcher {
    pub fn new(options: FetchOptions) -> Result<Self> {
        let client = Client::builder()
            .user_agent(options.user_agent.clone())
            .timeout(options.timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client, options })
    }

    pub fn options(&self) -> &FetchOptions {
        &self.options
    }

    /// Reject text too short to be a real article body.
    fn validate(&self, text: String) -> Result<String, AnalyzeError> {
        let length = text.chars().count();
        if length < self.options.min_text_chars {
            return Err(AnalyzeError::UnreadableContent { length });
        }
        Ok(text)
    }
}

#[async_trait]
impl ArticleSource for ArticleFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String, AnalyzeError> {
        debug!(url = url, "Fetching article");

        let response = self.client.get(url).send().await.map_err(|e| {
            warn!(url = url, error = %e, "Article request failed");
            AnalyzeError::from_transport(e)
        })?;

        let status = response.status().as_u16();
        if let Some(err) = AnalyzeError::from_status(status) {
            warn!(url = url, status = status, "Article site returned an error status");
            return Err(err);
        }

        let body = response
            .text()
            .await
            .map_err(AnalyzeError::from_transport)?;

        // Parse synchronously: the parsed document must not live across an await.
        let text = extract_text_from_html(&body);
        let text = self.validate(text).inspect_err(|e| {
            warn!(url = url, error = %e, "Extracted text rejected");
        })?;

        info!(
            url = url,
            status = status,
            body_bytes = body.len(),
            text_chars = text.chars().count(),
            "Extracted article text"
        );

        Ok(text)
    }
}
