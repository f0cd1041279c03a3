//! Native persistent scope: a flat JSON object on disk, written through on
//! every change.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use anyhow::{Context, Result};

use super::{KeyValueStore, MemoryStore};
use crate::domain::SiteError;

pub struct JsonFileStore {
    path: PathBuf,
    cache: MemoryStore,
}

impl JsonFileStore {
    /// Loads `path` if it exists; a missing file starts an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries: BTreeMap<String, String> = match fs::read_to_string(&path) {
            Ok(text) if text.trim().is_empty() => BTreeMap::new(),
            Ok(text) => serde_json::from_str(&text)
                .with_context(|| format!("Failed to parse state file {}", path.display()))?,
            Err(e) if e.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to read state file {}", path.display()));
            }
        };

        Ok(Self {
            path,
            cache: MemoryStore::from_entries(entries),
        })
    }

    /// Starts empty without reading `path`. The first write replaces the file.
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: MemoryStore::default(),
        }
    }

    fn flush(&self) -> Result<(), SiteError> {
        let json = serde_json::to_string_pretty(self.cache.entries())
            .map_err(|e| SiteError::Storage(e.to_string()))?;
        fs::write(&self.path, json)
            .map_err(|e| SiteError::Storage(format!("{}: {}", self.path.display(), e)))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.cache.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SiteError> {
        let previous = self.cache.get(key);
        self.cache.set(key, value)?;
        if let Err(e) = self.flush() {
            // Keep memory and disk in agreement when the write fails
            match previous {
                Some(old) => self.cache.set(key, &old)?,
                None => self.cache.remove(key)?,
            }
            return Err(e);
        }
        #[cfg(debug_assertions)]
        super::trace_write(key, Some(value));
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), SiteError> {
        let Some(previous) = self.cache.get(key) else {
            return Ok(());
        };
        self.cache.remove(key)?;
        if let Err(e) = self.flush() {
            self.cache.set(key, &previous)?;
            return Err(e);
        }
        #[cfg(debug_assertions)]
        super::trace_write(key, None);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");

        let mut store = JsonFileStore::open(&path).unwrap();
        assert_eq!(store.get("k"), None);
        store.set("k", "v").unwrap();
        store.set("gone", "x").unwrap();
        store.remove("gone").unwrap();

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.get("k").as_deref(), Some("v"));
        assert_eq!(reopened.get("gone"), None);
    }

    #[test]
    fn malformed_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(JsonFileStore::open(&path).is_err());
    }

    #[test]
    fn failed_write_leaves_previous_value() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be written as a file
        let mut store = JsonFileStore::empty(dir.path());

        let err = store.set("k", "v").unwrap_err();
        assert!(matches!(err, SiteError::Storage(_)));
        assert_eq!(store.get("k"), None);
    }
}
