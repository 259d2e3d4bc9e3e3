//! Path management for Lede configuration and data files.
//!
//! Everything lives under one per-user config directory:
//!
//! ```text
//! ~/.config/lede/
//! ├── config.json          # Service endpoint configuration
//! └── conversations.json   # Persisted conversation store
//! ```

use std::path::PathBuf;

use lede_core::error::{LedeError, Result};

pub struct LedePaths;

impl LedePaths {
    /// Returns the Lede configuration directory for this platform.
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("lede"))
            .ok_or_else(|| LedeError::config("Cannot determine config directory"))
    }

    /// Returns the path to the service configuration file.
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Returns the path to the persisted conversation store.
    pub fn conversations_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("conversations.json"))
    }
}
