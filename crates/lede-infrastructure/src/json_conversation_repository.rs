//! JSON-file-backed conversation repository.

use std::path::PathBuf;

use async_trait::async_trait;
use lede_core::conversation::{ConversationRepository, ConversationStore};
use lede_core::error::{LedeError, Result};
use tokio::fs;

use crate::paths::LedePaths;

/// Persists the whole conversation store as one pretty-printed JSON file.
///
/// A missing file loads as an empty store. A corrupt file is surfaced as a
/// serialization error rather than silently discarded, so history is not
/// clobbered by the next save.
pub struct JsonConversationRepository {
    file_path: PathBuf,
}

impl JsonConversationRepository {
    /// Creates a repository backed by the default conversations file.
    pub fn new() -> Result<Self> {
        Ok(Self {
            file_path: LedePaths::conversations_file()?,
        })
    }

    /// Creates a repository backed by an explicit file path.
    pub fn with_path(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }
}

#[async_trait]
impl ConversationRepository for JsonConversationRepository {
    async fn load(&self) -> Result<ConversationStore> {
        if !fs::try_exists(&self.file_path).await? {
            tracing::debug!(path = %self.file_path.display(), "No conversation file, starting empty");
            return Ok(ConversationStore::new());
        }

        let content = fs::read_to_string(&self.file_path).await.map_err(|e| {
            LedeError::storage(format!(
                "Failed to read {}: {}",
                self.file_path.display(),
                e
            ))
        })?;

        serde_json::from_str(&content).map_err(|e| LedeError::Serialization {
            format: "JSON".to_string(),
            message: format!("Invalid conversation file {}: {}", self.file_path.display(), e),
        })
    }

    async fn save(&self, store: &ConversationStore) -> Result<()> {
        if let Some(parent) = self.file_path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let content = serde_json::to_string_pretty(store).map_err(|e| LedeError::Serialization {
            format: "JSON".to_string(),
            message: e.to_string(),
        })?;

        fs::write(&self.file_path, content).await.map_err(|e| {
            LedeError::storage(format!(
                "Failed to write {}: {}",
                self.file_path.display(),
                e
            ))
        })?;

        tracing::debug!(
            path = %self.file_path.display(),
            conversations = store.len(),
            "Saved conversation store"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lede_core::conversation::Conversation;
    use tempfile::TempDir;

    fn repository(dir: &TempDir) -> JsonConversationRepository {
        JsonConversationRepository::with_path(dir.path().join("conversations.json"))
    }

    #[tokio::test]
    async fn missing_file_loads_as_empty_store() {
        let dir = TempDir::new().unwrap();
        let repo = repository(&dir);

        let store = repo.load().await.unwrap();
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn save_then_load_roundtrips() {
        let dir = TempDir::new().unwrap();
        let repo = repository(&dir);

        let mut store = ConversationStore::new();
        store.upsert(Conversation::new(
            "conv-1",
            "Rust in Production",
            "https://example.com/rust",
            "2024-01-01T09:00:00Z",
        ));
        repo.save(&store).await.unwrap();

        let loaded = repo.load().await.unwrap();
        assert_eq!(loaded, store);
        assert_eq!(loaded.find_by_id("conv-1").unwrap().article_title, "Rust in Production");
    }

    #[tokio::test]
    async fn save_creates_missing_parent_directories() {
        let dir = TempDir::new().unwrap();
        let repo = JsonConversationRepository::with_path(
            dir.path().join("nested").join("conversations.json"),
        );

        repo.save(&ConversationStore::new()).await.unwrap();
        assert!(dir.path().join("nested").join("conversations.json").exists());
    }

    #[tokio::test]
    async fn corrupt_file_is_a_serialization_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("conversations.json");
        std::fs::write(&path, "{ not json").unwrap();

        let repo = JsonConversationRepository::with_path(&path);
        let err = repo.load().await.unwrap_err();

        assert!(matches!(err, LedeError::Serialization { .. }));
    }
}
