// Keyword scorer trait.
//
// The pipeline and web layer only see this trait, so the single-document
// TF-IDF scorer can be replaced without touching them.

use super::models::Keyword;

/// Turns raw article text into a ranked keyword list.
pub trait KeywordScorer: Send + Sync {
    /// Score `text` and return at most `top_k` keywords, highest weight
    /// first, with the first weight normalized to exactly 1.0.
    ///
    /// Text with nothing scorable is not an error: the result is just empty.
    fn score(&self, text: &str, top_k: usize) -> Vec<Keyword>;
}
