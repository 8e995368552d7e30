// Single-document TF-IDF keyword scorer.
//
// The cleaned article is the only document in its corpus, so smoothed idf
// (ln((1 + n) / (1 + df)) + 1) comes out as 1.0 for every term and the
// ranking is plain term frequency after L2 normalization. The full formula
// is kept anyway so the weights match a conventional TF-IDF vectorizer.
//
// Ties are broken by first occurrence in the text, both when capping the
// vocabulary and when ranking, so identical input always yields identical
// output.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use regex_lite::Regex;
use tracing::debug;

use super::models::Keyword;
use super::stopwords::StopWords;
use super::traits::KeywordScorer;

pub const DEFAULT_TOP_K: usize = 50;
pub const DEFAULT_MAX_FEATURES: usize = 1000;
pub const DEFAULT_MIN_WORD_LEN: usize = 2;

static NON_LETTER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z\s]").expect("non-letter pattern is valid"));
static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Lowercase, replace anything that isn't `a-z` or whitespace with a space,
/// collapse whitespace runs and trim.
///
/// Digits, punctuation and non-Latin scripts all disappear here.
pub fn preprocess(text: &str) -> String {
    let lower = text.to_lowercase();
    let letters_only = NON_LETTER_RE.replace_all(&lower, " ");
    WHITESPACE_RE
        .replace_all(&letters_only, " ")
        .trim()
        .to_string()
}

/// Split preprocessed text into tokens of at least `min_len` letters.
pub fn tokenize(cleaned: &str, min_len: usize) -> impl Iterator<Item = &str> {
    cleaned
        .split(' ')
        .filter(move |token| !token.is_empty() && token.len() >= min_len)
}

/// One vocabulary entry while scoring.
struct Term<'a> {
    word: &'a str,
    count: usize,
    first_seen: usize,
    weight: f64,
}

/// TF-IDF scorer over a single document.
#[derive(Debug, Clone)]
pub struct TfIdfScorer {
    stopwords: Arc<StopWords>,
    /// Only this many of the most frequent distinct words are candidates
    pub max_features: usize,
    /// Shorter tokens are never candidates
    pub min_word_len: usize,
}

impl TfIdfScorer {
    pub fn new(stopwords: Arc<StopWords>) -> Self {
        Self {
            stopwords,
            max_features: DEFAULT_MAX_FEATURES,
            min_word_len: DEFAULT_MIN_WORD_LEN,
        }
    }

    pub fn stopwords(&self) -> &StopWords {
        &self.stopwords
    }

    /// Count non-stopword tokens, remembering where each word first appeared.
    fn count_terms<'a>(&self, cleaned: &'a str) -> Vec<Term<'a>> {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut terms: Vec<Term<'a>> = Vec::new();

        for (position, token) in tokenize(cleaned, self.min_word_len).enumerate() {
            if self.stopwords.contains(token) {
                continue;
            }
            match index.get(token) {
                Some(&i) => terms[i].count += 1,
                None => {
                    index.insert(token, terms.len());
                    terms.push(Term {
                        word: token,
                        count: 1,
                        first_seen: position,
                        weight: 0.0,
                    });
                }
            }
        }

        terms
    }
}

impl KeywordScorer for TfIdfScorer {
    fn score(&self, text: &str, top_k: usize) -> Vec<Keyword> {
        let cleaned = preprocess(text);
        if cleaned.is_empty() {
            return Vec::new();
        }

        let mut terms = self.count_terms(&cleaned);
        let vocabulary = terms.len();

        // Vocabulary cap: keep the most frequent words, earliest first on ties.
        terms.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then(a.first_seen.cmp(&b.first_seen))
        });
        terms.truncate(self.max_features);

        // Corpus of one: every surviving term occurs in the single document.
        let n_docs = 1.0_f64;
        let doc_freq = 1.0_f64;
        let idf = ((1.0 + n_docs) / (1.0 + doc_freq)).ln() + 1.0;
        for term in &mut terms {
            term.weight = term.count as f64 * idf;
        }

        let norm = terms.iter().map(|t| t.weight * t.weight).sum::<f64>().sqrt();
        if norm > 0.0 {
            for term in &mut terms {
                term.weight /= norm;
            }
        }

        terms.sort_by(|a, b| {
            b.weight
                .total_cmp(&a.weight)
                .then(a.first_seen.cmp(&b.first_seen))
        });
        terms.truncate(top_k);

        // A zero maximum would divide by zero; treat it as 1.0 and let the
        // zero-weight filter below drop everything that carries no signal.
        let max_weight = terms.first().map(|t| t.weight).unwrap_or(0.0);
        let max_weight = if max_weight > 0.0 { max_weight } else { 1.0 };

        let keywords: Vec<Keyword> = terms
            .into_iter()
            .filter(|t| t.weight > 0.0)
            .map(|t| Keyword::new(t.word, t.weight / max_weight))
            .collect();

        debug!(
            vocabulary = vocabulary,
            candidates = vocabulary.min(self.max_features),
            returned = keywords.len(),
            top_keyword = keywords.first().map(|k| k.word.as_str()).unwrap_or(""),
            "Scored keywords"
        );

        keywords
    }
}
