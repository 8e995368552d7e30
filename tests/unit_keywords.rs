// Unit tests for keyword scoring.
//
// Checks the ranking invariants every result must satisfy (normalization,
// ordering, size bound, stopword exclusion, determinism) plus the worked
// examples for the single-document TF-IDF scorer.

use std::sync::Arc;

use wordcloud::keywords::models::Keyword;
use wordcloud::keywords::stopwords::{StopWords, NEWS_FILLER};
use wordcloud::keywords::tfidf::{preprocess, TfIdfScorer, DEFAULT_TOP_K};
use wordcloud::keywords::traits::KeywordScorer;

const ARTICLE: &str = "\
    Wildfire crews battled a fast-moving blaze on Tuesday as strong winds pushed \
    the wildfire toward several mountain towns. Officials said evacuation orders \
    covered thousands of homes, and the wildfire had already destroyed dozens of \
    structures. Firefighters from three states joined the effort. The governor \
    told reporters that the state would request federal aid, and residents were \
    urged to leave before the winds strengthened again overnight. Smoke from the \
    blaze drifted hundreds of miles, and air quality warnings were issued for \
    cities across the region. Firefighters expect the winds to ease by Thursday.";

fn english_scorer() -> TfIdfScorer {
    TfIdfScorer::new(Arc::new(StopWords::english()))
}

fn scorer_with(stop: &[&str]) -> TfIdfScorer {
    TfIdfScorer::new(Arc::new(StopWords::from_words(stop.iter().copied())))
}

fn words(keywords: &[Keyword]) -> Vec<&str> {
    keywords.iter().map(|k| k.word.as_str()).collect()
}

// ============================================================
// Invariants
// ============================================================

#[test]
fn scoring_is_idempotent() {
    let scorer = english_scorer();
    let first = scorer.score(ARTICLE, DEFAULT_TOP_K);
    let second = scorer.score(ARTICLE, DEFAULT_TOP_K);
    assert_eq!(first, second);
}

#[test]
fn top_weight_is_exactly_one_and_all_in_unit_interval() {
    let out = english_scorer().score(ARTICLE, DEFAULT_TOP_K);
    assert!(!out.is_empty());
    assert_eq!(out[0].weight, 1.0);
    for k in &out {
        assert!(
            k.weight > 0.0 && k.weight <= 1.0,
            "{} has weight {}",
            k.word,
            k.weight
        );
    }
}

#[test]
fn weights_are_monotonically_non_increasing() {
    let out = english_scorer().score(ARTICLE, DEFAULT_TOP_K);
    for pair in out.windows(2) {
        assert!(
            pair[0].weight >= pair[1].weight,
            "{} ({}) ranked above {} ({})",
            pair[0].word,
            pair[0].weight,
            pair[1].word,
            pair[1].weight
        );
    }
}

#[test]
fn output_never_exceeds_top_k() {
    let scorer = english_scorer();
    for top_k in [1, 3, 10, 50, 500] {
        assert!(scorer.score(ARTICLE, top_k).len() <= top_k);
    }
}

#[test]
fn no_duplicate_words() {
    let out = english_scorer().score(ARTICLE, DEFAULT_TOP_K);
    let mut seen = std::collections::HashSet::new();
    for k in &out {
        assert!(seen.insert(k.word.clone()), "duplicate word {}", k.word);
    }
}

#[test]
fn stopwords_never_appear() {
    let stopwords = StopWords::english();
    let scorer = TfIdfScorer::new(Arc::new(stopwords.clone()));

    // Feed the stopwords themselves in along with real content.
    let mut text: String = stopwords.iter().collect::<Vec<_>>().join(" ");
    text.push(' ');
    text.push_str(ARTICLE);

    let out = scorer.score(&text, 1000);
    assert!(!out.is_empty());
    for k in &out {
        assert!(!stopwords.contains(&k.word), "stopword {} in output", k.word);
    }
}

#[test]
fn news_filler_is_excluded() {
    let text = "said said said would told year years today people wildfire";
    let out = english_scorer().score(text, 10);
    assert_eq!(words(&out), vec!["wildfire"]);
    for filler in NEWS_FILLER {
        assert!(out.iter().all(|k| k.word != *filler));
    }
}

#[test]
fn words_are_lowercase_alphabetic() {
    let out = english_scorer().score("COVID-19 Vaccine's ROLLOUT in 2021, café", 10);
    for k in &out {
        assert!(
            k.word.chars().all(|c| c.is_ascii_lowercase()),
            "non a-z word {}",
            k.word
        );
    }
}

// ============================================================
// Degenerate input
// ============================================================

#[test]
fn all_punctuation_and_digits_yields_empty() {
    let out = english_scorer().score("123 456 !!! ... ??? --- 3.14 (42)", 10);
    assert!(out.is_empty());
}

#[test]
fn empty_text_yields_empty() {
    assert!(english_scorer().score("", 10).is_empty());
    assert!(english_scorer().score("   \n\t ", 10).is_empty());
}

#[test]
fn preprocess_matches_documented_cleanup() {
    assert_eq!(
        preprocess("  The U.S. economy grew 2.5% in Q3!\n\nAnalysts cheered.  "),
        "the u s economy grew in q analysts cheered"
    );
}

// ============================================================
// Worked examples
// ============================================================

#[test]
fn cat_and_mat_tie_at_the_top() {
    let scorer = scorer_with(&["the", "on", "was"]);
    let out = scorer.score(
        "The cat sat on the mat. The cat was happy. The mat was red.",
        3,
    );

    assert_eq!(out.len(), 3);
    assert_eq!(out[0], Keyword::new("cat", 1.0));
    assert_eq!(out[1], Keyword::new("mat", 1.0));
    // Remaining words appear once: half the weight of the leaders.
    assert_eq!(out[2].word, "sat");
    assert!((out[2].weight - 0.5).abs() < 1e-12);
}

#[test]
fn ties_break_by_first_occurrence() {
    let scorer = scorer_with(&[]);
    let out = scorer.score("zebra apple mango apple zebra mango", 3);
    assert_eq!(words(&out), vec!["zebra", "apple", "mango"]);
    assert!(out.iter().all(|k| k.weight == 1.0));
}

#[test]
fn wildfire_article_leads_with_wildfire() {
    let out = english_scorer().score(ARTICLE, 5);
    assert_eq!(out[0].word, "wildfire");
    assert!(words(&out).contains(&"winds"));
}

#[test]
fn single_letter_fragments_are_not_words() {
    // "it's" cleans to "it s"; the lone "s" is never a candidate.
    let out = scorer_with(&[]).score("it's storm's s s s s", 10);
    assert!(out.iter().all(|k| k.word.len() >= 2));
    assert_eq!(out[0].word, "it");
}
