// Keyword scoring: article text -> ranked, normalized (word, weight) list.

pub mod models;
pub mod stopwords;
pub mod tfidf;
pub mod traits;
