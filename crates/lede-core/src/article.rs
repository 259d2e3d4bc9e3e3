//! Article record produced by extraction.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Maximum number of characters of article text kept and sent to the
/// assistant service.
pub const MAX_CONTENT_CHARS: usize = 15_000;

/// Extracted page content plus metadata, used as context for remote queries.
///
/// An article is produced once per reading session and is immutable
/// thereafter. `content` is whitespace-normalized and truncated to
/// [`MAX_CONTENT_CHARS`]; `length` is the word count of the full normalized
/// text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    /// Page title
    pub title: String,
    /// Normalized, truncated article text
    pub content: String,
    /// Canonical page URL
    pub url: String,
    /// Byline author, empty when none was found
    pub author: String,
    /// Word count of the normalized text
    pub length: usize,
    /// Extraction timestamp (ISO 8601 format)
    pub timestamp: String,
}

impl Article {
    /// Builds an article from raw extracted text.
    ///
    /// Collapses whitespace runs to single spaces, trims both ends, counts
    /// words, and truncates the content to [`MAX_CONTENT_CHARS`] characters.
    pub fn new(
        title: impl Into<String>,
        raw_content: &str,
        url: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        let content = normalize_whitespace(raw_content);
        let length = word_count(&content);
        let content = truncate_chars(&content, MAX_CONTENT_CHARS);

        Self {
            title: title.into(),
            content,
            url: url.into(),
            author: author.into(),
            length,
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

/// Collapses runs of whitespace to single spaces and trims both ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Counts words by whitespace splitting.
///
/// Empty content counts as one word. That mirrors the historical
/// `split(/\s+/).length` semantics this record format was defined with and
/// is part of the wire contract, so it stays.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count().max(1)
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_normalizes_whitespace() {
        let article = Article::new("Title", "  hello \n\t world  ", "https://a.example", "");
        assert_eq!(article.content, "hello world");
        assert_eq!(article.length, 2);
    }

    #[test]
    fn new_truncates_to_max_chars() {
        let raw = "word ".repeat(4000); // 20000 chars
        let article = Article::new("Title", &raw, "https://a.example", "");
        assert_eq!(article.content.chars().count(), MAX_CONTENT_CHARS);
        // Word count reflects the full text, not the truncated copy
        assert_eq!(article.length, 4000);
    }

    #[test]
    fn empty_content_counts_as_one_word() {
        let article = Article::new("Title", "", "https://a.example", "");
        assert_eq!(article.content, "");
        assert_eq!(article.length, 1);
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let raw = "é".repeat(MAX_CONTENT_CHARS + 10);
        let article = Article::new("Title", &raw, "https://a.example", "");
        assert_eq!(article.content.chars().count(), MAX_CONTENT_CHARS);
    }
}
