//! Persisted last-used sensor address
//!
//! The client remembers the single most recent sensor host so the CLI can
//! be invoked without arguments. The value lives in a tiny TOML document
//! under the user's config directory; nothing else is persisted.

use crate::error::{Result, WeatherError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

const APP_DIR: &str = "esp-weather";
const CONFIG_FILE: &str = "config.toml";

/// On-disk document holding the remembered host
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StoredHost {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    host: Option<String>,
}

/// Store for the last-used sensor host
#[derive(Debug, Clone)]
pub struct HostStore {
    path: PathBuf,
}

impl HostStore {
    /// Store under the platform config directory
    /// (e.g. `~/.config/esp-weather/config.toml` on Linux)
    pub fn from_user_dirs() -> Result<Self> {
        let base = dirs::config_dir()
            .ok_or_else(|| WeatherError::config("no user config directory available"))?;
        Ok(Self::at_path(base.join(APP_DIR).join(CONFIG_FILE)))
    }

    /// Store backed by an explicit file path
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the remembered host, if any
    pub async fn load(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let contents = tokio::fs::read_to_string(&self.path).await?;
        let stored: StoredHost = toml::from_str(&contents).map_err(|e| {
            WeatherError::config(format!("corrupt host store {}: {e}", self.path.display()))
        })?;

        Ok(stored.host.filter(|host| !host.trim().is_empty()))
    }

    /// Remember `host` as the last-used sensor address
    pub async fn save(&self, host: &str) -> Result<()> {
        let host = host.trim();
        if host.is_empty() {
            return Err(WeatherError::invalid_input("refusing to store an empty host"));
        }

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let stored = StoredHost {
            host: Some(host.to_string()),
        };
        let contents = toml::to_string_pretty(&stored)
            .map_err(|e| WeatherError::config(format!("failed to encode host store: {e}")))?;
        tokio::fs::write(&self.path, contents).await?;

        debug!("saved sensor host to {}", self.path.display());
        Ok(())
    }
}
