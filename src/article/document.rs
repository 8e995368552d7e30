// HTML document capabilities the extractor needs: find elements by tag
// name and pull their text. The extraction heuristic is written against
// these traits, so it doesn't care which parser sits underneath.
//
// `ScraperDocument` is the production implementation on top of `scraper`.

use scraper::{ElementRef, Html, Selector};
use tracing::warn;

/// An element inside a parsed document.
pub trait HtmlNode: Sized {
    /// Every descendant element with the given tag name, in document order.
    fn find_all(&self, tag: &str) -> Vec<Self>;

    /// The element's text: each text node trimmed, empty ones dropped,
    /// the rest joined with single spaces.
    fn text(&self) -> String;
}

/// A parsed HTML document.
pub trait HtmlDocument {
    type Node<'a>: HtmlNode
    where
        Self: 'a;

    /// The first element with the given tag name, in document order.
    fn find_first(&self, tag: &str) -> Option<Self::Node<'_>>;

    /// Every element with the given tag name, in document order.
    fn find_all(&self, tag: &str) -> Vec<Self::Node<'_>>;
}

/// `scraper`-backed document.
///
/// `scraper::Html` is not `Send`, so parse and extract inside a synchronous
/// call and never hold one across an `.await`.
pub struct ScraperDocument {
    html: Html,
}

impl ScraperDocument {
    /// Parse a full HTML document. Parsing is lenient and never fails;
    /// garbage in yields a document with few or no elements.
    pub fn parse(body: &str) -> Self {
        Self {
            html: Html::parse_document(body),
        }
    }
}

impl HtmlDocument for ScraperDocument {
    type Node<'a> = ElementRef<'a>;

    fn find_first(&self, tag: &str) -> Option<ElementRef<'_>> {
        let selector = tag_selector(tag)?;
        self.html.select(&selector).next()
    }

    fn find_all(&self, tag: &str) -> Vec<ElementRef<'_>> {
        match tag_selector(tag) {
            Some(selector) => self.html.select(&selector).collect(),
            None => Vec::new(),
        }
    }
}

impl<'a> HtmlNode for ElementRef<'a> {
    fn find_all(&self, tag: &str) -> Vec<Self> {
        match tag_selector(tag) {
            Some(selector) => self.select(&selector).collect(),
            None => Vec::new(),
        }
    }

    fn text(&self) -> String {
        ElementRef::text(self)
            .map(str::trim)
            .filter(|chunk| !chunk.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Build a selector matching a bare tag name.
fn tag_selector(tag: &str) -> Option<Selector> {
    match Selector::parse(tag) {
        Ok(selector) => Some(selector),
        Err(e) => {
            warn!(tag = tag, error = %e, "Invalid tag selector");
            None
        }
    }
}
