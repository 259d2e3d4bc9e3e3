//! Assistant service seam.
//!
//! The session controller talks to the remote summarization/QA service
//! through this trait so the application layer can be exercised without a
//! live backend. The concrete HTTP client lives in `lede-interaction`;
//! dynamic dispatch keeps the dependency pointing one way.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::article::Article;
use crate::error::Result;

/// Which kind of summary to request.
///
/// The serialized names are the wire `type` values the service expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SummaryKind {
    /// Prose summary, 2-3 paragraphs
    #[serde(rename = "summary")]
    Summary,
    /// Bulleted key points
    #[serde(rename = "key-points")]
    KeyPoints,
}

/// A remote service that can summarize an article or answer questions
/// about it.
#[async_trait]
pub trait Assistant: Send + Sync {
    /// Requests a summary (or key points) for the article.
    ///
    /// Returns the assistant's reply text. Failures carry HTTP status and
    /// retryability metadata in [`crate::LedeError::Api`]; no retry is
    /// attempted here.
    async fn summarize(
        &self,
        article: &Article,
        kind: SummaryKind,
        conversation_id: &str,
    ) -> Result<String>;

    /// Asks a free-form question about the article.
    async fn ask(&self, article: &Article, question: &str, conversation_id: &str)
    -> Result<String>;
}
