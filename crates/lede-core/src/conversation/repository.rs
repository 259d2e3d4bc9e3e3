//! Conversation store repository trait.
//!
//! Defines the interface for persisting the conversation store, decoupling
//! the application's core logic from the specific storage mechanism.

use async_trait::async_trait;

use super::store::ConversationStore;
use crate::error::Result;

/// An abstract repository for the persisted conversation store.
///
/// The store is one logical record: implementations load and save it whole.
/// There is no cross-process mutual exclusion around the read-then-write
/// cycle; a single active writer is assumed.
#[async_trait]
pub trait ConversationRepository: Send + Sync {
    /// Loads the full store.
    ///
    /// A missing backing record loads as an empty store; a corrupt one is an
    /// error.
    async fn load(&self) -> Result<ConversationStore>;

    /// Persists the full store, replacing the previous record.
    async fn save(&self, store: &ConversationStore) -> Result<()>;
}
