//! String-keyed, string-valued persistence.
//!
//! Two scopes exist at runtime: a persistent store (survives reloads) and a
//! session store (lives as long as the tab / process). Both are plain
//! `KeyValueStore`s handed around as `SharedStore` handles so every consumer
//! sees the same data without reaching for globals.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::domain::SiteError;

#[cfg(not(target_arch = "wasm32"))]
pub mod file_store;
#[cfg(target_arch = "wasm32")]
pub mod web_store;

#[cfg(not(target_arch = "wasm32"))]
pub use file_store::JsonFileStore;
#[cfg(target_arch = "wasm32")]
pub use web_store::WebStorage;

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), SiteError>;
    /// Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), SiteError>;

    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

/// Single-threaded shared handle to a store. Clones alias the same data.
pub type SharedStore = Rc<RefCell<dyn KeyValueStore>>;

pub fn shared<S: KeyValueStore + 'static>(store: S) -> SharedStore {
    Rc::new(RefCell::new(store))
}

/// Persistent + session store pair for one browser tab (or one native process).
#[derive(Clone)]
pub struct StorageScopes {
    pub persistent: SharedStore,
    pub session: SharedStore,
}

impl StorageScopes {
    pub fn new(persistent: SharedStore, session: SharedStore) -> Self {
        Self {
            persistent,
            session,
        }
    }

    /// Both scopes in memory. Used by tests and as a last-resort fallback.
    pub fn in_memory() -> Self {
        Self::new(shared(MemoryStore::default()), shared(MemoryStore::default()))
    }
}

/// Process-local store. Also serves as the session scope on native builds.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn from_entries(entries: BTreeMap<String, String>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &BTreeMap<String, String> {
        &self.entries
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SiteError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), SiteError> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(debug_assertions)]
pub(crate) fn trace_write(key: &str, value: Option<&str>) {
    if crate::config::DEBUG_FLAGS.print_storage_writes {
        match value {
            Some(value) => log::info!("[storage] set {key} = {value}"),
            None => log::info!("[storage] remove {key}"),
        }
    }
}
