//! Browser scopes: `localStorage` (persistent) and `sessionStorage` (tab).

use web_sys::Storage;

use super::KeyValueStore;
use crate::domain::SiteError;

pub struct WebStorage {
    inner: Storage,
}

impl WebStorage {
    pub fn local() -> Result<Self, SiteError> {
        let window = web_sys::window().ok_or_else(|| no_storage("window"))?;
        let inner = window
            .local_storage()
            .map_err(|_| no_storage("localStorage"))?
            .ok_or_else(|| no_storage("localStorage"))?;
        Ok(Self { inner })
    }

    pub fn session() -> Result<Self, SiteError> {
        let window = web_sys::window().ok_or_else(|| no_storage("window"))?;
        let inner = window
            .session_storage()
            .map_err(|_| no_storage("sessionStorage"))?
            .ok_or_else(|| no_storage("sessionStorage"))?;
        Ok(Self { inner })
    }
}

fn no_storage(what: &str) -> SiteError {
    SiteError::Storage(format!("{what} is not available"))
}

impl KeyValueStore for WebStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SiteError> {
        self.inner
            .set_item(key, value)
            .map_err(|e| SiteError::Storage(format!("{:?}", e)))?;
        #[cfg(debug_assertions)]
        super::trace_write(key, Some(value));
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), SiteError> {
        self.inner
            .remove_item(key)
            .map_err(|e| SiteError::Storage(format!("{:?}", e)))?;
        #[cfg(debug_assertions)]
        super::trace_write(key, None);
        Ok(())
    }
}
