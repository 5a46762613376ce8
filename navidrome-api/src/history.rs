//! Recent searches — persisted to `~/.config/navidrome/recent-searches.json`.
//!
//! The file holds a JSON array of strings, most recent first:
//!
//! ```json
//! ["jazz", "blues"]
//! ```
//!
//! At most [`MAX_RECENT_SEARCHES`] distinct entries are kept. A missing or
//! corrupt file reads as an empty list; losing history is not an error.

use crate::config::config_dir;
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

pub const MAX_RECENT_SEARCHES: usize = 10;
const RECENT_SEARCHES_KEY: &str = "recent-searches";

/// Ordered, de-duplicated list of recent search strings bound to a file.
#[derive(Debug, Clone)]
pub struct RecentSearches {
    path: PathBuf,
    entries: Vec<String>,
}

impl RecentSearches {
    /// Load from the default location under the config directory.
    pub fn load() -> Result<Self> {
        Ok(Self::load_from(Self::path()?))
    }

    /// Load from `path`, degrading to an empty list on any read or parse failure.
    pub fn load_from(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = read_entries(&path);
        Self { path, entries }
    }

    /// Default storage path.
    pub fn path() -> Result<PathBuf> {
        Ok(config_dir()?.join(format!("{RECENT_SEARCHES_KEY}.json")))
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Record `query` as the most recent search.
    ///
    /// The query is trimmed; blank input is ignored. An equal existing entry
    /// moves to the front instead of being duplicated.
    pub fn add(&mut self, query: &str) -> Result<()> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Ok(());
        }
        self.entries.retain(|s| s != trimmed);
        self.entries.insert(0, trimmed.to_owned());
        self.entries.truncate(MAX_RECENT_SEARCHES);
        self.save()
    }

    /// Remove an exact entry. Missing entries are not an error.
    pub fn remove(&mut self, query: &str) -> Result<()> {
        self.entries.retain(|s| s != query);
        self.save()
    }

    /// Forget every entry and delete the backing file.
    pub fn clear(&mut self) -> Result<()> {
        self.entries.clear();
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string(&self.entries)?)?;
        Ok(())
    }
}

fn read_entries(path: &Path) -> Vec<String> {
    let Ok(raw) = fs::read_to_string(path) else {
        return Vec::new();
    };
    if raw.is_empty() {
        return Vec::new();
    }
    match serde_json::from_str(&raw) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "ignoring corrupt recent searches");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(dir: &tempfile::TempDir) -> RecentSearches {
        RecentSearches::load_from(dir.path().join("recent-searches.json"))
    }

    #[test]
    fn readding_moves_to_front() {
        let dir = tempfile::tempdir().unwrap();
        let mut recent = store(&dir);
        recent.add("jazz").unwrap();
        recent.add("blues").unwrap();
        recent.add("jazz").unwrap();
        assert_eq!(recent.entries(), ["jazz", "blues"]);
    }

    #[test]
    fn persists_across_loads() {
        let dir = tempfile::tempdir().unwrap();
        let mut recent = store(&dir);
        recent.add("jazz").unwrap();
        recent.add("blues").unwrap();

        let reloaded = store(&dir);
        assert_eq!(reloaded.entries(), ["blues", "jazz"]);
        let raw = fs::read_to_string(dir.path().join("recent-searches.json")).unwrap();
        assert_eq!(raw, r#"["blues","jazz"]"#);
    }

    #[test]
    fn trims_and_ignores_blank() {
        let dir = tempfile::tempdir().unwrap();
        let mut recent = store(&dir);
        recent.add("  miles  ").unwrap();
        recent.add("   ").unwrap();
        recent.add("").unwrap();
        assert_eq!(recent.entries(), ["miles"]);
    }

    #[test]
    fn keeps_at_most_ten() {
        let dir = tempfile::tempdir().unwrap();
        let mut recent = store(&dir);
        for i in 0..15 {
            recent.add(&format!("q{i}")).unwrap();
        }
        assert_eq!(recent.entries().len(), MAX_RECENT_SEARCHES);
        assert_eq!(recent.entries()[0], "q14");
        assert_eq!(recent.entries()[9], "q5");
    }

    #[test]
    fn remove_and_clear() {
        let dir = tempfile::tempdir().unwrap();
        let mut recent = store(&dir);
        recent.add("a").unwrap();
        recent.add("b").unwrap();
        recent.remove("a").unwrap();
        recent.remove("missing").unwrap();
        assert_eq!(store(&dir).entries(), ["b"]);

        recent.clear().unwrap();
        assert!(recent.is_empty());
        assert!(!dir.path().join("recent-searches.json").exists());
        assert!(store(&dir).is_empty());
    }

    #[test]
    fn corrupt_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recent-searches.json");
        fs::write(&path, "{not json").unwrap();
        assert!(RecentSearches::load_from(&path).is_empty());

        fs::write(&path, r#"{"jazz": 1}"#).unwrap();
        assert!(RecentSearches::load_from(&path).is_empty());
    }
}
