//! File-backed durable client storage.

use std::collections::BTreeMap;
use std::path::PathBuf;

use score_core::Result;
use score_core::repository::KeyValueStore;

use super::atomic_toml::AtomicTomlFile;
use crate::paths::ScorePaths;

type Entries = BTreeMap<String, String>;

/// Key/value store persisted as a flat TOML table.
///
/// Each `set`/`remove` is a locked read-modify-write, so concurrent processes
/// sharing the file get last-write-wins per key.
pub struct TomlKeyValueStore {
    file: AtomicTomlFile<Entries>,
}

impl TomlKeyValueStore {
    /// Opens the store at the default session file location.
    pub fn new() -> Result<Self> {
        Ok(Self::with_path(ScorePaths::session_file()?))
    }

    /// Opens the store at a custom path.
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            file: AtomicTomlFile::new(path),
        }
    }

    pub fn path(&self) -> &std::path::Path {
        self.file.path()
    }
}

impl KeyValueStore for TomlKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.file.load()?.unwrap_or_default();
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.file.update(Entries::new(), |entries| {
            entries.insert(key.to_string(), value.to_string());
        })?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        if !self.file.path().exists() {
            return Ok(());
        }
        self.file.update(Entries::new(), |entries| {
            entries.remove(key);
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_set_get_remove() {
        let temp_dir = TempDir::new().unwrap();
        let store = TomlKeyValueStore::with_path(temp_dir.path().join("session.toml"));

        assert_eq!(store.get("a").unwrap(), None);
        store.set("a", "1").unwrap();
        store.set("b", "two\nlines").unwrap();
        store.set("a", "3").unwrap();

        assert_eq!(store.get("a").unwrap().as_deref(), Some("3"));
        assert_eq!(store.get("b").unwrap().as_deref(), Some("two\nlines"));

        store.remove("a").unwrap();
        store.remove("a").unwrap();
        assert_eq!(store.get("a").unwrap(), None);
        assert_eq!(store.get("b").unwrap().as_deref(), Some("two\nlines"));
    }

    #[test]
    fn test_remove_on_missing_file_creates_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("session.toml");
        let store = TomlKeyValueStore::with_path(path.clone());

        store.remove("anything").unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_survives_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("session.toml");

        TomlKeyValueStore::with_path(path.clone())
            .set("score.selected_company", "Acme")
            .unwrap();

        let reopened = TomlKeyValueStore::with_path(path);
        assert_eq!(
            reopened.get("score.selected_company").unwrap().as_deref(),
            Some("Acme")
        );
    }
}
