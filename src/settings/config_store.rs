//! Webhook and download URLs saved from the admin dashboard.
//!
//! Two layers exist: values stored by the admin (per browser) and the static
//! `SiteConfig` defaults. `stored_*` reads only the first layer; `*_url`
//! prefers it and falls back to the second.

use crate::config::{STORAGE_KEYS, SiteConfig};
use crate::domain::{SiteError, validate_url};
use crate::storage::SharedStore;

#[derive(Clone)]
pub struct ConfigStore {
    persistent: SharedStore,
    defaults: SiteConfig,
}

impl ConfigStore {
    pub fn new(persistent: SharedStore, defaults: SiteConfig) -> Self {
        Self {
            persistent,
            defaults,
        }
    }

    /// Effective webhook endpoint for signups.
    pub fn webhook_url(&self) -> Option<String> {
        self.stored_webhook_url()
            .or_else(|| self.defaults.script_url().map(str::to_string))
    }

    pub fn stored_webhook_url(&self) -> Option<String> {
        self.read(STORAGE_KEYS.webhook_url)
    }

    /// Validates and persists the webhook endpoint. Returns the trimmed value
    /// that was stored; on error the previous value is kept.
    pub fn set_webhook_url(&self, url: &str) -> Result<String, SiteError> {
        self.write_url(STORAGE_KEYS.webhook_url, url)
    }

    /// Effective download link for the public download buttons.
    pub fn download_url(&self) -> Option<String> {
        self.stored_download_url()
            .or_else(|| self.defaults.download_url().map(str::to_string))
    }

    pub fn stored_download_url(&self) -> Option<String> {
        self.read(STORAGE_KEYS.download_url)
    }

    pub fn set_download_url(&self, url: &str) -> Result<String, SiteError> {
        self.write_url(STORAGE_KEYS.download_url, url)
    }

    /// Deletes the stored download link entirely (not the same as storing "").
    pub fn remove_download_url(&self) -> Result<(), SiteError> {
        self.persistent.borrow_mut().remove(STORAGE_KEYS.download_url)
    }

    fn read(&self, key: &str) -> Option<String> {
        self.persistent
            .borrow()
            .get(key)
            .filter(|value| !value.is_empty())
    }

    fn write_url(&self, key: &str, raw: &str) -> Result<String, SiteError> {
        let url = validate_url(raw)?;
        self.persistent.borrow_mut().set(key, url)?;
        Ok(url.to_string())
    }
}
