//! Remote collaborators for Lede.
//!
//! This crate owns everything that crosses the network: the HTTP client for
//! the summarization/QA service and the page fetcher that retrieves article
//! HTML, plus the service configuration they share.

pub mod client;
pub mod config;
pub mod page;

pub use client::AssistantClient;
pub use config::ServiceConfig;
pub use page::PageFetcher;
