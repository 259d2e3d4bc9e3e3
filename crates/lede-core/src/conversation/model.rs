//! Conversation domain model.

use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use super::message::{ConversationMessage, MessageRole};

/// A persisted exchange of messages tied to one article.
///
/// One conversation is resumable per (article URL, local calendar day);
/// conversations for the same URL on other days are distinct records.
/// `message_count` and `first_question` are derived from `messages` and kept
/// in sync by [`Conversation::set_messages`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    /// Unique conversation identifier (UUID format)
    pub id: String,
    /// Title of the article the conversation is about
    pub article_title: String,
    /// URL of the article the conversation is about
    pub article_url: String,
    /// Timestamp when the conversation was started (ISO 8601 format)
    pub started_at: String,
    /// Timestamp of the most recent exchange (ISO 8601 format)
    pub last_updated: String,
    /// Chronological message log
    #[serde(default)]
    pub messages: Vec<ConversationMessage>,
    /// Derived: number of messages in the log
    #[serde(default)]
    pub message_count: usize,
    /// Derived: content of the first user message, empty when none
    #[serde(default)]
    pub first_question: String,
}

impl Conversation {
    /// Creates an empty conversation for an article.
    pub fn new(
        id: impl Into<String>,
        article_title: impl Into<String>,
        article_url: impl Into<String>,
        started_at: impl Into<String>,
    ) -> Self {
        let started_at = started_at.into();
        Self {
            id: id.into(),
            article_title: article_title.into(),
            article_url: article_url.into(),
            last_updated: started_at.clone(),
            started_at,
            messages: Vec::new(),
            message_count: 0,
            first_question: String::new(),
        }
    }

    /// Replaces the message log and refreshes the derived fields.
    pub fn set_messages(&mut self, messages: Vec<ConversationMessage>) {
        self.messages = messages;
        self.message_count = self.messages.len();
        self.first_question = self
            .messages
            .iter()
            .find(|m| m.role == MessageRole::User)
            .map(|m| m.content.clone())
            .unwrap_or_default();
    }

    /// Whether this conversation was started on the given local calendar day.
    ///
    /// Comparison is against the local date of `started_at`; conversations
    /// straddling midnight stop being resumable. An unparseable timestamp
    /// never matches.
    pub fn started_on(&self, date: NaiveDate) -> bool {
        DateTime::parse_from_rfc3339(&self.started_at)
            .map(|ts| ts.with_timezone(&Local).date_naive() == date)
            .unwrap_or(false)
    }

    /// Case-insensitive substring match across the article title, the first
    /// question, and every message body.
    pub fn matches_query(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.article_title.to_lowercase().contains(&needle)
            || self.first_question.to_lowercase().contains(&needle)
            || self
                .messages
                .iter()
                .any(|m| m.content.to_lowercase().contains(&needle))
    }
}
