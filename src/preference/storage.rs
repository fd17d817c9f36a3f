//! Key-value storage backends for persisted preferences.

use std::collections::BTreeMap;
use std::path::{
    Path,
    PathBuf,
};

use serde_json::{
    Map,
    Value,
};

use crate::error::StorageError;

/// Durable string key-value storage.
///
/// Every call may fail; callers decide how to degrade.
pub trait KeyValueStore {
    /// # Errors
    /// Storage is inaccessible or its content cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// # Errors
    /// Storage is inaccessible or cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// # Errors
    /// Storage is inaccessible or cannot be written.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// In-memory storage, also able to simulate inaccessible storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    /// Stored raw values.
    entries: BTreeMap<String, String>,
    /// Every operation fails while set.
    unavailable: bool,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store on which every operation fails.
    #[must_use]
    pub fn unavailable() -> Self {
        Self { entries: BTreeMap::new(), unavailable: true }
    }

    /// Seeds a raw value, bypassing availability.
    #[must_use]
    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }

    pub fn set_available(&mut self, available: bool) {
        self.unavailable = !available;
    }

    /// Fails when the store simulates inaccessible storage.
    fn check_available(&self) -> Result<(), StorageError> {
        if self.unavailable {
            return Err(StorageError::Unavailable("memory store disabled".to_string()));
        }
        Ok(())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.check_available()?;
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.check_available()?;
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.check_available()?;
        self.entries.remove(key);
        Ok(())
    }
}

/// Storage backed by a single JSON object file (`{"key": "value", ...}`).
///
/// The file is read on every `get` and rewritten on every change. A missing
/// file reads as empty storage. Entries that are not JSON strings read as
/// absent, and an unparseable file is replaced on the next write.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    /// Backing JSON file.
    path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the whole file as a JSON object.
    fn read_entries(&self) -> Result<Map<String, Value>, StorageError> {
        if !self.path.exists() {
            tracing::debug!("Storage file not found: {:?}", self.path);
            return Ok(Map::new());
        }

        let content = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Current entries as the base of a write.
    ///
    /// Content that does not parse is dropped so that writes can recover the file.
    fn entries_for_update(&self) -> Result<Map<String, Value>, StorageError> {
        match self.read_entries() {
            Err(StorageError::Parse(e)) => {
                tracing::warn!("Discarding unreadable storage file {:?}: {e}", self.path);
                Ok(Map::new())
            }
            other => other,
        }
    }

    /// Replaces the file content with `entries`.
    fn write_entries(&self, entries: &Map<String, Value>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(entries)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self.read_entries()?.remove(key) {
            Some(Value::String(value)) => Ok(Some(value)),
            Some(other) => {
                tracing::warn!("Ignoring non-string storage entry '{key}': {other}");
                Ok(None)
            }
            None => Ok(None),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries_for_update()?;
        entries.insert(key.to_string(), Value::String(value.to_string()));
        self.write_entries(&entries)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries_for_update()?;
        if entries.remove(key).is_some() {
            self.write_entries(&entries)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;

    use googletest::prelude::*;
    use rstest::*;
    use tempfile::TempDir;

    use super::*;

    #[rstest]
    fn memory_store_set_get_remove() {
        let mut store = MemoryStore::new();

        store.set("lang", "fr").unwrap();
        assert_that!(store.get("lang").unwrap(), some(eq("fr")));

        store.remove("lang").unwrap();
        assert_that!(store.get("lang").unwrap(), none());
    }

    #[rstest]
    fn memory_store_unavailable_fails_every_operation() {
        let mut store = MemoryStore::unavailable().with_entry("lang", "fr");

        assert!(matches!(store.get("lang"), Err(StorageError::Unavailable(_))));
        assert!(matches!(store.set("lang", "de"), Err(StorageError::Unavailable(_))));
        assert!(matches!(store.remove("lang"), Err(StorageError::Unavailable(_))));

        store.set_available(true);
        assert_that!(store.get("lang").unwrap(), some(eq("fr")));
    }

    #[rstest]
    fn json_file_store_persists_between_instances() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("prefs").join("storage.json");

        let mut store = JsonFileStore::new(&path);
        store.set("lang", "ja").unwrap();
        store.set("muted", "true").unwrap();

        let reopened = JsonFileStore::new(&path);
        assert_that!(reopened.get("lang").unwrap(), some(eq("ja")));
        assert_that!(reopened.get("muted").unwrap(), some(eq("true")));
        assert_that!(reopened.get("other").unwrap(), none());
    }

    #[rstest]
    fn json_file_store_missing_file_reads_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().join("absent.json"));

        assert_that!(store.get("lang").unwrap(), none());
    }

    #[rstest]
    fn json_file_store_remove_deletes_key() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = JsonFileStore::new(temp_dir.path().join("storage.json"));
        store.set("lang", "ja").unwrap();
        store.set("muted", "false").unwrap();

        store.remove("lang").unwrap();

        assert_that!(store.get("lang").unwrap(), none());
        assert_that!(store.get("muted").unwrap(), some(eq("false")));
    }

    #[rstest]
    fn json_file_store_corrupt_file_is_replaced_on_write() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("storage.json");
        fs::write(&path, "not json").unwrap();
        let mut store = JsonFileStore::new(&path);

        assert!(matches!(store.get("lang"), Err(StorageError::Parse(_))));

        store.set("lang", "en").unwrap();

        assert_that!(store.get("lang").unwrap(), some(eq("en")));
        assert_that!(JsonFileStore::new(&path).get("lang").unwrap(), some(eq("en")));
    }

    #[rstest]
    #[case(r#"{"lang": "fr", "muted": true}"#)]
    #[case(r#"{"lang": "fr", "muted": 1}"#)]
    #[case(r#"{"lang": "fr", "muted": null}"#)]
    #[case(r#"{"lang": "fr", "muted": {"value": "true"}}"#)]
    fn json_file_store_non_string_entry_reads_as_absent(#[case] content: &str) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("storage.json");
        fs::write(&path, content).unwrap();
        let mut store = JsonFileStore::new(&path);

        assert_that!(store.get("lang").unwrap(), some(eq("fr")));
        assert_that!(store.get("muted").unwrap(), none());

        store.set("muted", "false").unwrap();
        assert_that!(store.get("muted").unwrap(), some(eq("false")));
        assert_that!(store.get("lang").unwrap(), some(eq("fr")));
    }

    #[rstest]
    fn json_file_store_non_object_root_is_replaced_on_write() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("storage.json");
        fs::write(&path, r#"["lang", "fr"]"#).unwrap();
        let mut store = JsonFileStore::new(&path);

        assert!(matches!(store.get("lang"), Err(StorageError::Parse(_))));

        store.remove("lang").unwrap();
        store.set("lang", "de").unwrap();
        assert_that!(store.get("lang").unwrap(), some(eq("de")));
    }
}
