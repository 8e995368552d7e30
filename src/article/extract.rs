// Article text heuristic.
//
// News sites vary too much for a universal selector. Prefer paragraphs inside
// the first <article> container; when a page has no such container, take
// every <p> in the document. The fallback trades precision for recall and
// will sometimes pull in nav or footer boilerplate.

use super::document::{HtmlDocument, HtmlNode, ScraperDocument};

/// Semantic container preferred when present.
pub const ARTICLE_TAG: &str = "article";
/// Paragraph-level element whose text makes up the body.
pub const PARAGRAPH_TAG: &str = "p";

/// Extract body text from any document implementation.
pub fn extract_text<D: HtmlDocument>(doc: &D) -> String {
    let paragraphs = match doc.find_first(ARTICLE_TAG) {
        Some(article) => article.find_all(PARAGRAPH_TAG),
        None => doc.find_all(PARAGRAPH_TAG),
    };

    let texts: Vec<String> = paragraphs.iter().map(HtmlNode::text).collect();
    collapse_whitespace(&texts.join(" "))
}

/// Parse raw HTML and extract its body text.
pub fn extract_text_from_html(html: &str) -> String {
    extract_text(&ScraperDocument::parse(html))
}

/// Collapse every whitespace run (newlines and tabs included) to a single
/// space and trim both ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
