//! Saved-conversation browsing.

use std::sync::Arc;

use chrono::{DateTime, Local, Utc};
use lede_core::conversation::{Conversation, ConversationRepository, StoreStats};
use lede_core::error::{LedeError, Result};

/// Longest first-question preview shown in list views.
const PREVIEW_MAX_CHARS: usize = 80;

/// One row in a history listing.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversationSummary {
    pub id: String,
    pub title: String,
    /// Human-readable age of the last exchange ("3h ago", "2d ago", ...)
    pub age: String,
    pub message_count: usize,
    pub first_question_preview: String,
}

/// Read-only views over the conversation store.
pub struct HistoryBrowser {
    repository: Arc<dyn ConversationRepository>,
}

impl HistoryBrowser {
    pub fn new(repository: Arc<dyn ConversationRepository>) -> Self {
        Self { repository }
    }

    /// All saved conversations, most recent first.
    pub async fn list(&self) -> Result<Vec<ConversationSummary>> {
        let store = self.repository.load().await?;
        Ok(store.conversations().iter().map(summarize).collect())
    }

    /// Conversations matching a free-text query, most recent first.
    pub async fn search(&self, query: &str) -> Result<Vec<ConversationSummary>> {
        let store = self.repository.load().await?;
        Ok(store.search(query).into_iter().map(summarize).collect())
    }

    /// The full record of one conversation.
    pub async fn open(&self, id: &str) -> Result<Conversation> {
        let store = self.repository.load().await?;
        store
            .find_by_id(id)
            .cloned()
            .ok_or_else(|| LedeError::not_found("conversation", id))
    }

    /// Aggregate statistics over the store.
    pub async fn stats(&self) -> Result<StoreStats> {
        Ok(self.repository.load().await?.stats())
    }
}

fn summarize(conversation: &Conversation) -> ConversationSummary {
    ConversationSummary {
        id: conversation.id.clone(),
        title: conversation.article_title.clone(),
        age: relative_age(&conversation.last_updated, Utc::now()),
        message_count: conversation.message_count,
        first_question_preview: preview(&conversation.first_question),
    }
}

fn preview(text: &str) -> String {
    if text.chars().count() <= PREVIEW_MAX_CHARS {
        return text.to_string();
    }
    let truncated: String = text.chars().take(PREVIEW_MAX_CHARS).collect();
    format!("{truncated}...")
}

/// Renders a timestamp relative to `now`, falling back to the local date for
/// anything older than a week or unparseable.
fn relative_age(timestamp: &str, now: DateTime<Utc>) -> String {
    let Ok(parsed) = DateTime::parse_from_rfc3339(timestamp) else {
        return timestamp.to_string();
    };

    let elapsed = now.signed_duration_since(parsed.with_timezone(&Utc));
    let seconds = elapsed.num_seconds();

    if seconds < 60 {
        "Just now".to_string()
    } else if seconds < 3600 {
        format!("{}m ago", seconds / 60)
    } else if seconds < 86_400 {
        format!("{}h ago", seconds / 3600)
    } else if seconds < 604_800 {
        format!("{}d ago", seconds / 86_400)
    } else {
        parsed.with_timezone(&Local).format("%Y-%m-%d").to_string()
    }
}
