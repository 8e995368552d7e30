// Stopword list for news text.
//
// Two parts: a broad general-English list from the `stop-words` crate, and
// a curated list of news-reporting filler. Words like "said" or "year" are
// not grammatical stopwords but appear in nearly every article and carry no
// information about what the article is about.
//
// The set is built once at startup and shared read-only.

use std::collections::HashSet;

use stop_words::{get, LANGUAGE};

/// High-frequency news filler excluded on top of general English stopwords.
pub const NEWS_FILLER: &[&str] = &[
    "said", "would", "also", "could", "told", "says", "say", "mr", "mrs", "new", "one", "two",
    "three", "make", "made", "still", "last", "year", "years", "week", "weeks", "month",
    "months", "today", "tomorrow", "yesterday", "people",
];

/// Immutable set of lowercase words excluded from scoring.
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// General English stopwords plus [`NEWS_FILLER`].
    pub fn english() -> Self {
        let general: Vec<String> = get(LANGUAGE::English);
        Self::from_words(general).with_extra(NEWS_FILLER)
    }

    /// Build a set from arbitrary words. Entries are trimmed and lowercased;
    /// blank entries are ignored.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::default();
        set.extend(words);
        set
    }

    /// Add more words, e.g. from configuration.
    pub fn with_extra<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extend(words);
        self
    }

    fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words.extend(
            words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty()),
        );
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}
