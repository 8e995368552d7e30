// Wordcloud: fetch a news article and score its most salient words.
//
// This is the library root. The two core stages (article extraction and
// keyword scoring) are independent; the pipeline composes them and the
// optional web module wraps the pipeline in an HTTP service.

pub mod article;
pub mod config;
pub mod error;
pub mod keywords;
pub mod output;
pub mod pipeline;

#[cfg(feature = "web")]
pub mod web;
