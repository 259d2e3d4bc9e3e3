//! Conversation domain module.
//!
//! This module contains the conversation-related domain models, the capped
//! local store, and the repository interface for persistence.
//!
//! # Module Structure
//!
//! - `message`: Message types (`MessageRole`, `ConversationMessage`)
//! - `model`: Core conversation domain model (`Conversation`)
//! - `store`: Ordered, capacity-bounded store (`ConversationStore`)
//! - `repository`: Repository trait for store persistence

mod message;
mod model;
mod repository;
mod store;

// Re-export public API
pub use message::{ConversationMessage, MessageRole};
pub use model::Conversation;
pub use repository::ConversationRepository;
pub use store::{ConversationStore, StoreStats, MAX_CONVERSATIONS};
