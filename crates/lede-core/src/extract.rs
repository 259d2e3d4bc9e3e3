//! Article extraction heuristics.
//!
//! Given a page's HTML, finds the region most likely to hold the readable
//! article body and builds an [`Article`] record from it. The search is a
//! fixed selector priority list with a minimum-quality threshold, then a
//! `main` fallback, then the whole body with structural regions removed.

use std::collections::HashSet;

use ego_tree::{NodeId, NodeRef};
use scraper::{ElementRef, Html, Node, Selector};

use crate::article::{Article, normalize_whitespace};
use crate::error::{LedeError, Result};

/// Minimum normalized text length for a content region to be accepted
/// outright.
pub const MIN_CONTENT_CHARS: usize = 500;

/// Content-region selectors in priority order: semantic tags and class names
/// commonly used for article bodies.
pub const CONTENT_SELECTORS: &[&str] = &[
    "article",
    "[role=\"article\"]",
    ".article-content",
    ".post-content",
    ".entry-content",
    "main article",
    ".article-body",
    ".post-body",
    "#article-content",
    ".story-body",
    ".content-body",
];

/// Author-indicating selectors in priority order.
pub const AUTHOR_SELECTORS: &[&str] = &[
    "[rel=\"author\"]",
    ".author-name",
    ".author",
    "[itemprop=\"author\"]",
    ".byline",
    ".post-author",
];

/// Structural regions stripped from the body fallback.
pub const STRUCTURAL_SELECTORS: &[&str] = &[
    "nav",
    "header",
    "footer",
    ".navigation",
    ".sidebar",
    ".comments",
];

/// Tags whose text is never readable content.
const NON_CONTENT_TAGS: &[&str] = &["script", "style", "noscript", "template"];

/// Extracts the article record from a page.
///
/// Never panics on malformed markup; the only failure is a page whose body
/// holds no text at all.
pub fn extract_article(html: &str, url: &str) -> Result<Article> {
    let document = Html::parse_document(html);

    let title = document_title(&document);
    let mut content = best_content_candidate(&document);

    // Below threshold: generic main-content region
    if content.chars().count() <= MIN_CONTENT_CHARS {
        if let Some(main) = first_match(&document, "main") {
            content = normalize_whitespace(&element_text(main));
        }
    }

    // Last resort: the whole body with structural regions removed
    if content.chars().count() <= MIN_CONTENT_CHARS {
        content = normalize_whitespace(&body_text(&document));
    }

    if content.is_empty() {
        return Err(LedeError::extraction("page contains no readable text"));
    }

    let author = find_author(&document);

    Ok(Article::new(title, &content, url, author))
}

/// Walks the priority selector list; accepts the first region whose text
/// exceeds the threshold, otherwise keeps the longest candidate seen.
fn best_content_candidate(document: &Html) -> String {
    let mut best = String::new();

    for selector in CONTENT_SELECTORS {
        let Some(element) = first_match(document, selector) else {
            continue;
        };
        let text = normalize_whitespace(&element_text(element));
        if text.chars().count() > MIN_CONTENT_CHARS {
            return text;
        }
        if text.chars().count() > best.chars().count() {
            best = text;
        }
    }

    best
}

fn first_match<'a>(document: &'a Html, selector: &str) -> Option<ElementRef<'a>> {
    let selector = Selector::parse(selector).ok()?;
    document.select(&selector).next()
}

fn document_title(document: &Html) -> String {
    first_match(document, "title")
        .map(|el| el.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

/// First match of the author selector list, trimmed; empty when none.
fn find_author(document: &Html) -> String {
    AUTHOR_SELECTORS
        .iter()
        .find_map(|selector| first_match(document, selector))
        .map(|el| element_text(el).trim().to_string())
        .unwrap_or_default()
}

/// Body text with the structural denylist removed.
fn body_text(document: &Html) -> String {
    let Some(body) = first_match(document, "body") else {
        return String::new();
    };

    // scraper's DOM is immutable, so instead of deleting denylisted regions
    // we collect their node ids and skip those subtrees while walking.
    let mut excluded: HashSet<NodeId> = HashSet::new();
    for selector in STRUCTURAL_SELECTORS {
        if let Ok(selector) = Selector::parse(selector) {
            for element in document.select(&selector) {
                excluded.insert(element.id());
            }
        }
    }

    let mut out = String::new();
    collect_text(*body, &excluded, &mut out);
    out
}

/// Text of one element's subtree, skipping non-content tags.
fn element_text(element: ElementRef<'_>) -> String {
    let mut out = String::new();
    collect_text(*element, &HashSet::new(), &mut out);
    out
}

fn collect_text(node: NodeRef<'_, Node>, excluded: &HashSet<NodeId>, out: &mut String) {
    for child in node.children() {
        if excluded.contains(&child.id()) {
            continue;
        }
        match child.value() {
            Node::Text(text) => out.push_str(&text),
            Node::Element(element) => {
                if NON_CONTENT_TAGS.contains(&element.name()) {
                    continue;
                }
                // Element boundaries separate words, as rendered text would
                out.push('\n');
                collect_text(child, excluded, out);
                out.push('\n');
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::article::MAX_CONTENT_CHARS;

    fn page(body: &str) -> String {
        format!("<html><head><title>Test Page</title></head><body>{body}</body></html>")
    }

    fn long_text(words: usize) -> String {
        "lorem ipsum dolor ".repeat(words / 3)
    }

    #[test]
    fn article_selector_wins_when_above_threshold() {
        let text = long_text(120); // well above 500 chars
        let html = page(&format!(
            "<nav>site menu</nav><article>{text}</article><div class=\"post-content\">short</div>"
        ));

        let article = extract_article(&html, "https://example.com/a").unwrap();

        assert_eq!(article.content, normalize_whitespace(&text));
        assert_eq!(article.title, "Test Page");
        // No body fallback: navigation text never leaks in
        assert!(!article.content.contains("site menu"));
    }

    #[test]
    fn six_hundred_chars_in_article_returned_verbatim() {
        let text = "word ".repeat(120); // 600 chars
        let html = page(&format!("<article>{text}</article>"));

        let article = extract_article(&html, "https://example.com/b").unwrap();

        assert_eq!(article.content, normalize_whitespace(&text));
        assert_eq!(article.length, 120);
    }

    #[test]
    fn later_selector_wins_when_earlier_is_thin() {
        let text = long_text(150);
        let html = page(&format!(
            "<article>too short</article><div class=\"entry-content\">{text}</div>"
        ));

        let article = extract_article(&html, "https://example.com/c").unwrap();
        assert_eq!(article.content, normalize_whitespace(&text));
    }

    #[test]
    fn falls_back_to_main_below_threshold() {
        let text = long_text(150);
        let html = page(&format!("<article>thin</article><main>{text}</main>"));

        let article = extract_article(&html, "https://example.com/d").unwrap();
        assert_eq!(article.content, normalize_whitespace(&text));
    }

    #[test]
    fn body_fallback_strips_structural_regions() {
        let html = page(
            "<nav>navigation links</nav>\
             <header>big banner</header>\
             <p>the only real text</p>\
             <div class=\"sidebar\">related posts</div>\
             <div class=\"comments\">hot takes</div>\
             <footer>copyright</footer>",
        );

        let article = extract_article(&html, "https://example.com/e").unwrap();

        assert_eq!(article.content, "the only real text");
        assert!(!article.content.contains("navigation"));
        assert!(!article.content.contains("banner"));
        assert!(!article.content.contains("related"));
        assert!(!article.content.contains("copyright"));
    }

    #[test]
    fn script_and_style_text_never_collected() {
        let html = page(
            "<p>visible words</p><script>var hidden = 1;</script><style>.x{color:red}</style>",
        );

        let article = extract_article(&html, "https://example.com/f").unwrap();
        assert_eq!(article.content, "visible words");
    }

    #[test]
    fn page_without_selectors_still_returns_body_text() {
        let html = page("<div><span>plain</span> <span>markup</span></div>");

        let article = extract_article(&html, "https://example.com/g").unwrap();
        assert_eq!(article.content, "plain markup");
    }

    #[test]
    fn empty_body_is_an_extraction_error() {
        let html = page("<script>only = 'code';</script>");

        let err = extract_article(&html, "https://example.com/h").unwrap_err();
        assert!(matches!(err, LedeError::Extraction(_)));
    }

    #[test]
    fn author_taken_from_first_matching_selector() {
        let text = long_text(150);
        let html = page(&format!(
            "<article>{text}</article>\
             <span class=\"author\">  Jordan Reyes  </span>\
             <span class=\"byline\">someone else</span>"
        ));

        let article = extract_article(&html, "https://example.com/i").unwrap();
        assert_eq!(article.author, "Jordan Reyes");
    }

    #[test]
    fn missing_author_is_empty() {
        let html = page(&format!("<article>{}</article>", long_text(150)));
        let article = extract_article(&html, "https://example.com/j").unwrap();
        assert_eq!(article.author, "");
    }

    #[test]
    fn content_is_capped_at_max_chars() {
        let text = long_text(6000); // far beyond 15000 chars
        let html = page(&format!("<article>{text}</article>"));

        let article = extract_article(&html, "https://example.com/k").unwrap();
        assert!(article.content.chars().count() <= MAX_CONTENT_CHARS);
    }

    #[test]
    fn inline_markup_is_whitespace_normalized() {
        let text = long_text(150);
        let html = page(&format!(
            "<article><p>First   line</p><p>second\n\nline</p>{text}</article>"
        ));

        let article = extract_article(&html, "https://example.com/l").unwrap();
        assert!(article.content.starts_with("First line second line"));
    }
}
