//! Storage implementations for Lede.
//!
//! Persists the conversation store as a single JSON file under the user's
//! config directory.

pub mod json_conversation_repository;
pub mod paths;

pub use json_conversation_repository::JsonConversationRepository;
pub use paths::LedePaths;
