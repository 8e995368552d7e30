use std::env;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::article::fetcher::{FetchOptions, DEFAULT_MIN_TEXT_CHARS, DEFAULT_USER_AGENT};
use crate::keywords::stopwords::StopWords;
use crate::keywords::tfidf::{TfIdfScorer, DEFAULT_MAX_FEATURES, DEFAULT_TOP_K};

/// Origins allowed by default: the Vite dev server the frontend runs on.
pub const DEFAULT_ALLOWED_ORIGINS: &[&str] = &["http://localhost:5173", "http://127.0.0.1:5173"];

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded at startup via dotenvy; every value has a
/// default so an empty environment is a valid configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Upper bound on a single article fetch (WORDCLOUD_FETCH_TIMEOUT_SECS)
    pub fetch_timeout: Duration,
    /// User agent sent with every fetch (WORDCLOUD_USER_AGENT)
    pub user_agent: String,
    /// Extracted text shorter than this is unreadable (WORDCLOUD_MIN_TEXT_CHARS)
    pub min_text_chars: usize,
    /// Vocabulary cap before ranking (WORDCLOUD_MAX_FEATURES)
    pub max_features: usize,
    /// Keywords returned per article (WORDCLOUD_TOP_K)
    pub top_k: usize,
    /// Added to the built-in stopword list (WORDCLOUD_EXTRA_STOPWORDS, comma-separated)
    pub extra_stopwords: Vec<String>,
    /// CORS origins for the web service (WORDCLOUD_ALLOWED_ORIGINS, comma-separated)
    pub allowed_origins: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fetch_timeout: FetchOptions::default().timeout,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            min_text_chars: DEFAULT_MIN_TEXT_CHARS,
            max_features: DEFAULT_MAX_FEATURES,
            top_k: DEFAULT_TOP_K,
            extra_stopwords: Vec::new(),
            allowed_origins: DEFAULT_ALLOWED_ORIGINS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Unset or blank variables fall back to defaults. Malformed numbers
    /// are an error naming the offending variable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let fetch_timeout = match get("WORDCLOUD_FETCH_TIMEOUT_SECS") {
            Some(v) => Duration::from_secs(parse_number("WORDCLOUD_FETCH_TIMEOUT_SECS", &v)?),
            None => defaults.fetch_timeout,
        };
        let min_text_chars = match get("WORDCLOUD_MIN_TEXT_CHARS") {
            Some(v) => parse_number("WORDCLOUD_MIN_TEXT_CHARS", &v)?,
            None => defaults.min_text_chars,
        };
        let max_features = match get("WORDCLOUD_MAX_FEATURES") {
            Some(v) => parse_number("WORDCLOUD_MAX_FEATURES", &v)?,
            None => defaults.max_features,
        };
        let top_k = match get("WORDCLOUD_TOP_K") {
            Some(v) => parse_number("WORDCLOUD_TOP_K", &v)?,
            None => defaults.top_k,
        };

        if fetch_timeout.is_zero() {
            anyhow::bail!("WORDCLOUD_FETCH_TIMEOUT_SECS must be at least 1");
        }

        Ok(Self {
            fetch_timeout,
            user_agent: get("WORDCLOUD_USER_AGENT").unwrap_or(defaults.user_agent),
            min_text_chars,
            max_features,
            top_k,
            extra_stopwords: get("WORDCLOUD_EXTRA_STOPWORDS")
                .map(|v| split_list(&v))
                .unwrap_or(defaults.extra_stopwords),
            allowed_origins: get("WORDCLOUD_ALLOWED_ORIGINS")
                .map(|v| split_list(&v))
                .unwrap_or(defaults.allowed_origins),
        })
    }

    /// Options for the article fetcher.
    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions {
            timeout: self.fetch_timeout,
            user_agent: self.user_agent.clone(),
            min_text_chars: self.min_text_chars,
        }
    }

    /// The stopword set: built-in English + news filler + configured extras.
    /// Build this once and share it.
    pub fn stopwords(&self) -> StopWords {
        StopWords::english().with_extra(&self.extra_stopwords)
    }

    /// A scorer over the given shared stopword set.
    pub fn scorer(&self, stopwords: Arc<StopWords>) -> TfIdfScorer {
        let mut scorer = TfIdfScorer::new(stopwords);
        scorer.max_features = self.max_features;
        scorer
    }
}

fn parse_number<T>(key: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value
        .trim()
        .parse::<T>()
        .with_context(|| format!("{key} must be a non-negative integer, got {value:?}"))
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
