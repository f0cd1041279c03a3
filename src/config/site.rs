//! Static site configuration and persisted storage keys.
//!
//! `SiteConfig` is the deploy-time default layer. It is loaded once at startup
//! and never mutated; values an admin saves in the browser take precedence.

use serde::{Deserialize, Serialize};

/// Keys used in the persistent and session-scoped key-value stores.
pub struct StorageKeys {
    /// Persistent: checksum of the admin password
    pub credential_hash: &'static str,
    /// Session: present (value `"true"`) while the admin is unlocked
    pub unlocked_flag: &'static str,
    /// Persistent: signup webhook endpoint
    pub webhook_url: &'static str,
    /// Persistent: download link for the app build
    pub download_url: &'static str,
}

pub const STORAGE_KEYS: StorageKeys = StorageKeys {
    credential_hash: "nextlevel_admin_password",
    unlocked_flag: "nextlevel_admin_session",
    webhook_url: "nextlevel_script_url",
    download_url: "nextlevel_download_url",
};

/// Native builds keep the persistent store in this JSON file
pub const APP_STATE_PATH: &str = ".nextlevel_storage.json";

/// Optional static configuration file read by native builds at startup
pub const SITE_CONFIG_PATH: &str = "site_config.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteConfig {
    /// Fallback webhook endpoint used when no override is stored
    pub script_url: String,
    /// Fallback download link used when no override is stored
    pub download_url: String,
    /// Seeds the admin credential when none has been set up yet
    pub admin_password: String,
}

impl SiteConfig {
    /// Values baked in at build time through `NEXTLEVEL_SCRIPT_URL`,
    /// `NEXTLEVEL_DOWNLOAD_URL` and `NEXTLEVEL_ADMIN_PASSWORD`. Unset means empty.
    pub fn compiled() -> Self {
        Self {
            script_url: option_env!("NEXTLEVEL_SCRIPT_URL").unwrap_or_default().to_string(),
            download_url: option_env!("NEXTLEVEL_DOWNLOAD_URL")
                .unwrap_or_default()
                .to_string(),
            admin_password: option_env!("NEXTLEVEL_ADMIN_PASSWORD")
                .unwrap_or_default()
                .to_string(),
        }
    }

    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        let config: SiteConfig = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Reads a JSON config file. A missing file is `Ok(None)`.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_file(path: &std::path::Path) -> anyhow::Result<Option<Self>> {
        use anyhow::Context;

        if !path.exists() {
            return Ok(None);
        }
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading site config {}", path.display()))?;
        let config = Self::from_json_str(&json)
            .with_context(|| format!("parsing site config {}", path.display()))?;
        Ok(Some(config))
    }

    pub fn script_url(&self) -> Option<&str> {
        non_empty(&self.script_url)
    }

    pub fn download_url(&self) -> Option<&str> {
        non_empty(&self.download_url)
    }

    pub fn admin_password(&self) -> Option<&str> {
        non_empty(&self.admin_password)
    }
}

fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() { None } else { Some(trimmed) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_camel_case_and_fills_missing_fields() {
        let config = SiteConfig::from_json_str(
            r#"{ "scriptUrl": "https://hooks.example.com/exec", "adminPassword": "" }"#,
        )
        .unwrap();

        assert_eq!(config.script_url(), Some("https://hooks.example.com/exec"));
        assert_eq!(config.download_url(), None);
        assert_eq!(config.admin_password(), None);
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(SiteConfig::from_json_str("{ scriptUrl: ").is_err());
    }

    #[test]
    #[cfg(not(target_arch = "wasm32"))]
    fn missing_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = SiteConfig::from_file(&dir.path().join("site_config.json")).unwrap();
        assert_eq!(loaded, None);
    }

    #[test]
    #[cfg(not(target_arch = "wasm32"))]
    fn reads_file_and_reports_bad_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site_config.json");

        std::fs::write(&path, r#"{ "downloadUrl": " https://cdn.example.com/app.apk " }"#)
            .unwrap();
        let loaded = SiteConfig::from_file(&path).unwrap().unwrap();
        assert_eq!(loaded.download_url(), Some("https://cdn.example.com/app.apk"));

        std::fs::write(&path, "not json").unwrap();
        let err = SiteConfig::from_file(&path).unwrap_err();
        assert!(format!("{err:#}").contains("parsing site config"));
    }
}
