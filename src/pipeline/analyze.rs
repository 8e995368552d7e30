// Analyze pipeline: URL -> article text -> ranked keywords.
//
// The two stages share nothing but the text handed from one to the other.
// Everything here is per-call, so concurrent requests need no coordination.

use serde::{Deserialize, Serialize};
use tracing::info;
use url::Url;

use crate::article::fetcher::ArticleSource;
use crate::error::AnalyzeError;
use crate::keywords::models::Keyword;
use crate::keywords::traits::KeywordScorer;

/// Result of analyzing one article.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Analysis {
    pub url: String,
    /// Ranked keywords, highest weight first
    pub words: Vec<Keyword>,
}

/// Fetch `url`, extract its text and score it.
pub async fn analyze_url(
    source: &dyn ArticleSource,
    scorer: &dyn KeywordScorer,
    url: &str,
    top_k: usize,
) -> Result<Analysis, AnalyzeError> {
    let text = source.fetch_text(url).await?;
    let words = score_text(scorer, &text, top_k)?;

    info!(
        url = url,
        keywords = words.len(),
        top_keyword = words[0].word.as_str(),
        "Analyzed article"
    );

    Ok(Analysis {
        url: url.to_string(),
        words,
    })
}

/// Score already-extracted text, treating an empty result as a failure.
///
/// The scorer itself returns an empty list for degenerate text; at the
/// pipeline boundary that means there is nothing to show.
pub fn score_text(
    scorer: &dyn KeywordScorer,
    text: &str,
    top_k: usize,
) -> Result<Vec<Keyword>, AnalyzeError> {
    let words = scorer.score(text, top_k);
    if words.is_empty() {
        return Err(AnalyzeError::EmptyKeywordSet);
    }
    Ok(words)
}

/// Boundary check for inbound URLs: absolute, http(s), with a host.
pub fn validate_url(raw: &str) -> Result<Url, String> {
    let url = Url::parse(raw.trim()).map_err(|e| format!("Invalid URL: {e}"))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(format!("Unsupported URL scheme: {}", url.scheme()));
    }
    if url.host_str().is_none() {
        return Err("URL has no host".to_string());
    }
    Ok(url)
}
