// Failure taxonomy for the fetch -> extract -> score pipeline.
//
// Every failure is caller-recoverable. The variants carry just enough
// structure (kind + optional upstream status) that the web layer can pick a
// response code without matching on message strings.

use serde::Serialize;
use thiserror::Error;

/// A classified failure from fetching, extracting, or scoring an article.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    /// HTTP 401/403. Neither retryable nor a user input mistake.
    #[error("blocked by anti-scraping policy (HTTP {status})")]
    AccessDenied { status: u16 },

    #[error("article not found")]
    NotFound,

    /// Any other non-2xx status.
    #[error("site returned an error (HTTP {status})")]
    SiteError { status: u16 },

    #[error("site took too long to respond")]
    Timeout,

    /// DNS, refused connection, TLS failure, broken body stream.
    #[error("could not connect: {source}")]
    ConnectionFailure {
        #[source]
        source: reqwest::Error,
    },

    /// Extracted text was shorter than the configured minimum. Usually a
    /// paywall, a JS-rendered page, or a layout the heuristic can't read.
    #[error("could not extract readable content ({length} characters)")]
    UnreadableContent { length: usize },

    #[error("could not analyze: no keywords remained after filtering")]
    EmptyKeywordSet,
}

/// The kind of an [`AnalyzeError`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    AccessDenied,
    NotFound,
    SiteError,
    Timeout,
    ConnectionFailure,
    UnreadableContent,
    EmptyKeywordSet,
}

impl FailureKind {
    /// Transport status the boundary layer should answer with.
    pub fn http_status(self) -> u16 {
        match self {
            FailureKind::AccessDenied => 403,
            FailureKind::NotFound => 404,
            FailureKind::SiteError | FailureKind::ConnectionFailure => 502,
            FailureKind::Timeout => 504,
            FailureKind::UnreadableContent | FailureKind::EmptyKeywordSet => 422,
        }
    }

    /// What the caller should suggest to the user.
    pub fn hint(self) -> &'static str {
        match self {
            FailureKind::AccessDenied => "This site blocks automated readers. Try another source.",
            FailureKind::NotFound => "Check that the article URL is correct.",
            FailureKind::SiteError => "The site is having trouble. Try again later.",
            FailureKind::Timeout => "The site was slow. Try again.",
            FailureKind::ConnectionFailure => "Check the URL and your network connection.",
            FailureKind::UnreadableContent => {
                "The page may be paywalled or rendered by JavaScript. Try a different article."
            }
            FailureKind::EmptyKeywordSet => "The article had no scorable words. Try a different article.",
        }
    }
}

impl AnalyzeError {
    pub fn kind(&self) -> FailureKind {
        match self {
            AnalyzeError::AccessDenied { .. } => FailureKind::AccessDenied,
            AnalyzeError::NotFound => FailureKind::NotFound,
            AnalyzeError::SiteError { .. } => FailureKind::SiteError,
            AnalyzeError::Timeout => FailureKind::Timeout,
            AnalyzeError::ConnectionFailure { .. } => FailureKind::ConnectionFailure,
            AnalyzeError::UnreadableContent { .. } => FailureKind::UnreadableContent,
            AnalyzeError::EmptyKeywordSet => FailureKind::EmptyKeywordSet,
        }
    }

    /// Upstream HTTP status, when the failure came from one.
    pub fn status(&self) -> Option<u16> {
        match self {
            AnalyzeError::AccessDenied { status } | AnalyzeError::SiteError { status } => {
                Some(*status)
            }
            AnalyzeError::NotFound => Some(404),
            _ => None,
        }
    }

    /// Classify a non-success HTTP status.
    ///
    /// Returns `None` for 2xx so callers can write
    /// `if let Some(err) = AnalyzeError::from_status(code)`.
    pub fn from_status(status: u16) -> Option<Self> {
        match status {
            200..=299 => None,
            401 | 403 => Some(AnalyzeError::AccessDenied { status }),
            404 => Some(AnalyzeError::NotFound),
            _ => Some(AnalyzeError::SiteError { status }),
        }
    }

    /// Classify a transport-level failure. Timeouts are checked first since
    /// a connect timeout is also a connect error.
    pub fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AnalyzeError::Timeout
        } else {
            AnalyzeError::ConnectionFailure { source: err }
        }
    }
}
