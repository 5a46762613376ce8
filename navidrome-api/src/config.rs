//! Server configuration — persists URL and credentials to disk.
//!
//! The config file is stored at `~/.config/navidrome/config.json`:
//!
//! ```json
//! {
//!   "server_url": "https://music.example.com",
//!   "username": "alice",
//!   "password": "hunter2"
//! }
//! ```
//!
//! The environment variables `NAVIDROME_URL`, `NAVIDROME_USERNAME` and
//! `NAVIDROME_PASSWORD` take precedence over the file when all three are set.

use crate::error::{NavidromeError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

const ENV_URL: &str = "NAVIDROME_URL";
const ENV_USERNAME: &str = "NAVIDROME_USERNAME";
const ENV_PASSWORD: &str = "NAVIDROME_PASSWORD";

/// Immutable connection settings handed to
/// [`NavidromeClient::new`](crate::NavidromeClient::new).
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server root, e.g. `https://music.example.com`.
    pub server_url: String,
    pub username: String,
    pub password: String,
}

impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("server_url", &self.server_url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl ServerConfig {
    /// Build a config, stripping trailing slashes from the URL.
    pub fn new(
        server_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        let server_url = server_url.into().trim_end_matches('/').to_owned();
        Self {
            server_url,
            username: username.into(),
            password: password.into(),
        }
    }

    /// Server URL without trailing slashes.
    pub fn base_url(&self) -> &str {
        self.server_url.trim_end_matches('/')
    }

    /// Whether URL, username and password are all non-empty.
    pub fn is_complete(&self) -> bool {
        !self.base_url().is_empty() && !self.username.is_empty() && !self.password.is_empty()
    }

    /// Read the config from `NAVIDROME_*` environment variables.
    ///
    /// Returns `None` unless all three are set.
    pub fn from_env() -> Option<Self> {
        let url = std::env::var(ENV_URL).ok()?;
        let username = std::env::var(ENV_USERNAME).ok()?;
        let password = std::env::var(ENV_PASSWORD).ok()?;
        Some(Self::new(url, username, password))
    }

    /// Environment first, then the config file.
    pub fn resolve() -> Result<Self> {
        if let Some(config) = Self::from_env() {
            return Ok(config);
        }
        Self::load()
    }

    /// Load config from `~/.config/navidrome/config.json`.
    ///
    /// Returns a default (empty) config if the file does not exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load config from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Save config to disk, creating parent directories if needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    /// Save config to an explicit path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_string_pretty(self)?;
        fs::write(path, data)?;
        Ok(())
    }

    /// Delete the config file from disk.
    pub fn clear() -> Result<()> {
        let path = Self::path()?;
        if path.exists() {
            fs::remove_file(&path)?;
        }
        Ok(())
    }

    /// Location of the config file.
    pub fn path() -> Result<PathBuf> {
        Ok(config_dir()?.join("config.json"))
    }
}

/// `~/.config/navidrome`, shared with recent-search storage.
pub(crate) fn config_dir() -> Result<PathBuf> {
    let config = dirs::config_dir()
        .ok_or_else(|| NavidromeError::Other("cannot determine config directory".into()))?;
    Ok(config.join("navidrome"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_strips_trailing_slashes() {
        let config = ServerConfig::new("https://music.example.com///", "alice", "pw");
        assert_eq!(config.base_url(), "https://music.example.com");
    }

    #[test]
    fn base_url_strips_slashes_from_deserialized_value() {
        let config: ServerConfig = serde_json::from_str(
            r#"{"server_url":"http://nas:4533/","username":"a","password":"b"}"#,
        )
        .unwrap();
        assert_eq!(config.base_url(), "http://nas:4533");
    }

    #[test]
    fn completeness() {
        assert!(ServerConfig::new("http://x", "u", "p").is_complete());
        assert!(!ServerConfig::new("/", "u", "p").is_complete());
        assert!(!ServerConfig::new("http://x", "", "p").is_complete());
        assert!(!ServerConfig::default().is_complete());
    }

    #[test]
    fn debug_redacts_password() {
        let config = ServerConfig::new("http://x", "u", "topsecret");
        let shown = format!("{config:?}");
        assert!(!shown.contains("topsecret"));
        assert!(shown.contains("<redacted>"));
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = ServerConfig::new("http://nas:4533", "alice", "pw");
        config.save_to(&path).unwrap();
        assert_eq!(ServerConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let config = ServerConfig::load_from(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config, ServerConfig::default());
    }
}
