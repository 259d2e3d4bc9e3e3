//! Use cases for Lede.
//!
//! `SessionController` drives a reading session against the assistant
//! service; `HistoryBrowser` serves the saved-conversation views. Both sit on
//! the `Assistant` and `ConversationRepository` traits from `lede-core`, so
//! the HTTP client and JSON store can be swapped for stubs in tests.

pub mod history;
pub mod render;
pub mod session;

pub use history::{ConversationSummary, HistoryBrowser};
pub use render::FormattedReply;
pub use session::{ReadingSession, SessionController, SessionRequest};
