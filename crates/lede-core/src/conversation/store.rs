//! Ordered, capacity-bounded conversation store.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::model::Conversation;

/// Maximum number of conversations retained; older entries are evicted on
/// every write.
pub const MAX_CONVERSATIONS: usize = 50;

/// The full set of persisted conversations, most recent first.
///
/// Identity lookup by id is unique within the store; the capacity bound is
/// enforced by truncation on every upsert.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConversationStore {
    #[serde(default)]
    conversations: Vec<Conversation>,
}

/// Aggregate statistics over a store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoreStats {
    pub total_conversations: usize,
    pub total_messages: usize,
    pub avg_messages_per_conversation: f64,
}

impl ConversationStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.conversations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conversations.is_empty()
    }

    /// All conversations, most recent first.
    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    /// Looks up a conversation by its id.
    pub fn find_by_id(&self, id: &str) -> Option<&Conversation> {
        self.conversations.iter().find(|c| c.id == id)
    }

    /// Finds the conversation to resume for an article: same URL, started on
    /// the given local calendar day.
    pub fn find_resumable(&self, url: &str, date: NaiveDate) -> Option<&Conversation> {
        self.conversations
            .iter()
            .find(|c| c.article_url == url && c.started_on(date))
    }

    /// Inserts or updates a conversation, then enforces the capacity bound.
    ///
    /// An existing id is updated in place (store size unchanged); a new id is
    /// prepended. After every write the store is truncated to
    /// [`MAX_CONVERSATIONS`] entries, evicting from the back.
    pub fn upsert(&mut self, conversation: Conversation) {
        match self
            .conversations
            .iter_mut()
            .find(|c| c.id == conversation.id)
        {
            Some(existing) => *existing = conversation,
            None => self.conversations.insert(0, conversation),
        }
        self.conversations.truncate(MAX_CONVERSATIONS);
    }

    /// Conversations matching a free-text query, preserving store order.
    pub fn search(&self, query: &str) -> Vec<&Conversation> {
        self.conversations
            .iter()
            .filter(|c| c.matches_query(query))
            .collect()
    }

    /// Computes aggregate statistics over the store contents.
    pub fn stats(&self) -> StoreStats {
        let total_conversations = self.conversations.len();
        let total_messages: usize = self.conversations.iter().map(|c| c.messages.len()).sum();
        let avg_messages_per_conversation = if total_conversations == 0 {
            0.0
        } else {
            total_messages as f64 / total_conversations as f64
        };

        StoreStats {
            total_conversations,
            total_messages,
            avg_messages_per_conversation,
        }
    }
}
