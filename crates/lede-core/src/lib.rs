pub mod article;
pub mod assistant;
pub mod conversation;
pub mod error;
pub mod extract;

// Re-export common error type
pub use error::LedeError;
