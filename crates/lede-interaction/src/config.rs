//! Service configuration.
//!
//! Resolution order: `~/.config/lede/config.json`, then the `LEDE_API_URL`
//! environment variable, then the compiled default.

use std::env;
use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

/// Default base URL of the summarization/QA service.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

const CONFIG_FILE: &str = "config.json";
const BASE_URL_ENV: &str = "LEDE_API_URL";

/// Where the assistant service lives.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    /// Base URL of the remote service, no trailing slash
    pub base_url: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ServiceConfig {
    /// Loads the configuration, falling back through the resolution order.
    ///
    /// Never fails: an unreadable or malformed config file is logged and
    /// skipped.
    pub fn load() -> Self {
        if let Some(config) = Self::from_file() {
            return config;
        }

        if let Ok(url) = env::var(BASE_URL_ENV) {
            if !url.trim().is_empty() {
                return Self {
                    base_url: url.trim().trim_end_matches('/').to_string(),
                };
            }
        }

        Self::default()
    }

    fn from_file() -> Option<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return None;
        }

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config file {}: {}", path.display(), err);
                return None;
            }
        };

        match serde_json::from_str::<ServiceConfig>(&content) {
            Ok(mut config) => {
                config.base_url = config.base_url.trim_end_matches('/').to_string();
                Some(config)
            }
            Err(err) => {
                tracing::warn!("Ignoring malformed config file {}: {}", path.display(), err);
                None
            }
        }
    }

    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("lede").join(CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_localhost() {
        assert_eq!(ServiceConfig::default().base_url, "http://localhost:8000");
    }

    #[test]
    fn file_parse_normalizes_trailing_slash() {
        let config: ServiceConfig =
            serde_json::from_str(r#"{"base_url": "https://api.example.com/"}"#).unwrap();
        let normalized = config.base_url.trim_end_matches('/');
        assert_eq!(normalized, "https://api.example.com");
    }
}
