// Unit tests for the article text heuristic.
//
// Pure HTML-in, text-out checks: no network access.

use wordcloud::article::document::{HtmlDocument, HtmlNode, ScraperDocument};
use wordcloud::article::extract::{extract_text, extract_text_from_html};

// ============================================================
// Container preference and fallback
// ============================================================

#[test]
fn falls_back_to_all_paragraphs_without_article() {
    let html = r#"
        <html><body>
          <div class="story">
            <p>The council voted on Monday to approve the new transit plan.</p>
            <p>Construction is expected to begin next spring.</p>
          </div>
          <footer><p>Contact the newsroom.</p></footer>
        </body></html>"#;

    assert_eq!(
        extract_text_from_html(html),
        "The council voted on Monday to approve the new transit plan. \
         Construction is expected to begin next spring. Contact the newsroom."
    );
}

#[test]
fn prefers_paragraphs_inside_article() {
    let html = r#"
        <html><body>
          <nav><p>Home | World | Sport</p></nav>
          <article>
            <h1>Headline is not a paragraph</h1>
            <p>First paragraph of the story.</p>
            <div><p>Nested paragraph still counts.</p></div>
          </article>
          <footer><p>Copyright notice</p></footer>
        </body></html>"#;

    assert_eq!(
        extract_text_from_html(html),
        "First paragraph of the story. Nested paragraph still counts."
    );
}

#[test]
fn only_first_article_is_used() {
    let html = r#"
        <article><p>Main story text.</p></article>
        <article><p>Related story teaser.</p></article>"#;

    assert_eq!(extract_text_from_html(html), "Main story text.");
}

#[test]
fn article_without_paragraphs_yields_empty() {
    let html = r#"
        <p>Outside paragraph.</p>
        <article><div>Text in divs only.</div></article>"#;

    assert_eq!(extract_text_from_html(html), "");
}

// ============================================================
// Text cleanup
// ============================================================

#[test]
fn whitespace_runs_collapse_to_single_spaces() {
    let html = "<p>\n\t  Lots   of\n\n whitespace\t\there  </p><p>\n  and here\n</p>";
    assert_eq!(extract_text_from_html(html), "Lots of whitespace here and here");
}

#[test]
fn inline_markup_text_is_kept() {
    let html = r#"<p>The <a href="/x">mayor</a> <em>denied</em> the <strong>report</strong>.</p>"#;
    assert_eq!(extract_text_from_html(html), "The mayor denied the report .");
}

#[test]
fn empty_paragraphs_are_skipped() {
    let html = "<p></p><p>   </p><p>Real text.</p><p></p>";
    assert_eq!(extract_text_from_html(html), "Real text.");
}

#[test]
fn entities_are_decoded() {
    let html = "<p>Fish &amp; chips &mdash; a &quot;classic&quot;</p>";
    assert_eq!(extract_text_from_html(html), "Fish & chips \u{2014} a \"classic\"");
}

#[test]
fn no_markup_at_all() {
    assert_eq!(extract_text_from_html(""), "");
    assert_eq!(extract_text_from_html("plain text without tags"), "");
}

// ============================================================
// Heuristic over a different document implementation
// ============================================================

/// Minimal in-memory document: a list of (container, paragraphs).
struct FakeDocument {
    containers: Vec<(&'static str, Vec<&'static str>)>,
}

#[derive(Clone)]
enum FakeNode {
    Container(Vec<&'static str>),
    Paragraph(&'static str),
}

impl HtmlNode for FakeNode {
    fn find_all(&self, tag: &str) -> Vec<Self> {
        match (self, tag) {
            (FakeNode::Container(paragraphs), "p") => {
                paragraphs.iter().map(|p| FakeNode::Paragraph(*p)).collect()
            }
            _ => Vec::new(),
        }
    }

    fn text(&self) -> String {
        match self {
            FakeNode::Container(paragraphs) => paragraphs.join(" "),
            FakeNode::Paragraph(text) => text.to_string(),
        }
    }
}

impl HtmlDocument for FakeDocument {
    type Node<'a> = FakeNode;

    fn find_first(&self, tag: &str) -> Option<FakeNode> {
        self.containers
            .iter()
            .find(|(name, _)| *name == tag)
            .map(|(_, paragraphs)| FakeNode::Container(paragraphs.clone()))
    }

    fn find_all(&self, tag: &str) -> Vec<FakeNode> {
        if tag != "p" {
            return Vec::new();
        }
        self.containers
            .iter()
            .flat_map(|(_, paragraphs)| paragraphs.iter().map(|p| FakeNode::Paragraph(*p)))
            .collect()
    }
}

#[test]
fn heuristic_is_parser_independent() {
    let with_article = FakeDocument {
        containers: vec![
            ("nav", vec!["Menu"]),
            ("article", vec!["  Story\n one.", "Story two. "]),
        ],
    };
    assert_eq!(extract_text(&with_article), "Story one. Story two.");

    let without_article = FakeDocument {
        containers: vec![("div", vec!["Alpha."]), ("section", vec!["Beta."])],
    };
    assert_eq!(extract_text(&without_article), "Alpha. Beta.");
}

#[test]
fn scraper_document_finds_tags() {
    let doc = ScraperDocument::parse("<article><p>a</p><p>b</p></article>");
    assert!(doc.find_first("article").is_some());
    assert_eq!(doc.find_all("p").len(), 2);
}
