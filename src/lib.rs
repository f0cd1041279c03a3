#![allow(clippy::collapsible_if)]
#![allow(clippy::new_without_default)]

// Core modules
pub mod config;
pub mod domain;
pub mod net;
pub mod particles;
pub mod settings;
pub mod storage;
pub mod ui;
pub mod utils;

use std::path::PathBuf;
use std::rc::Rc;

// Re-export commonly used types
pub use config::SiteConfig;
pub use domain::{SiteError, ValidationError};
pub use settings::{ConfigStore, CredentialStore};
pub use storage::{KeyValueStore, MemoryStore, SharedStore, StorageScopes};
pub use ui::{AdminApp, LandingApp};
pub use utils::app_time;

// CLI argument parsing
use clap::Parser;

use crate::net::HttpWebhook;
use crate::ui::admin::AdminController;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Open the admin dashboard instead of the landing page
    #[arg(long, default_value_t = false)]
    pub admin: bool,

    /// JSON file backing the persistent settings store
    #[arg(long, default_value = config::APP_STATE_PATH)]
    pub state_file: PathBuf,

    /// Optional JSON file with scriptUrl / downloadUrl / adminPassword defaults
    #[arg(long, default_value = config::SITE_CONFIG_PATH)]
    pub site_config: PathBuf,
}

impl Cli {
    pub fn page(&self) -> Page {
        if self.admin { Page::Admin } else { Page::Landing }
    }
}

/// Which of the two pages to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Landing,
    Admin,
}

impl Page {
    /// Browser routing: any path containing "admin" opens the dashboard.
    pub fn from_path(pathname: &str) -> Self {
        if pathname.contains("admin") {
            Page::Admin
        } else {
            Page::Landing
        }
    }
}

/// Main application entry point - creates the GUI app for `page`
/// This is the public API for the binary to call
pub fn run_app(
    cc: &eframe::CreationContext,
    page: Page,
    scopes: StorageScopes,
    site_config: SiteConfig,
) -> Box<dyn eframe::App> {
    let config = ConfigStore::new(scopes.persistent.clone(), site_config.clone());

    match page {
        Page::Landing => Box::new(LandingApp::new(cc, config, Rc::new(HttpWebhook::new()))),
        Page::Admin => {
            let credentials = CredentialStore::new(scopes.persistent, scopes.session);
            let controller =
                AdminController::new(credentials, config, site_config.admin_password());
            Box::new(AdminApp::new(cc, controller))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_routing_matches_any_admin_path() {
        assert_eq!(Page::from_path("/admin.html"), Page::Admin);
        assert_eq!(Page::from_path("/site/admin/"), Page::Admin);
        assert_eq!(Page::from_path("/"), Page::Landing);
        assert_eq!(Page::from_path("/index.html"), Page::Landing);
    }

    #[test]
    fn cli_defaults_to_landing_page() {
        let cli = Cli::parse_from(["next-level-site"]);
        assert_eq!(cli.page(), Page::Landing);
        assert_eq!(cli.state_file, PathBuf::from(config::APP_STATE_PATH));

        let cli = Cli::parse_from(["next-level-site", "--admin", "--state-file", "/tmp/s.json"]);
        assert_eq!(cli.page(), Page::Admin);
        assert_eq!(cli.state_file, PathBuf::from("/tmp/s.json"));
    }
}
