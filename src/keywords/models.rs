use serde::{Deserialize, Serialize};

/// A scored word, ready to be drawn in a word cloud.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    /// Lowercase, alphabetic-only token
    pub word: String,
    /// Normalized weight in (0.0, 1.0]; the top keyword of a set is 1.0
    pub weight: f64,
}

impl Keyword {
    pub fn new(word: impl Into<String>, weight: f64) -> Self {
        Self {
            word: word.into(),
            weight,
        }
    }
}
