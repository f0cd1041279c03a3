//! Admin dashboard state machine, independent of any rendering.
//!
//! ```text
//! SetupRequired --valid new password--> Unlocked
//! Authenticating --matching password--> Unlocked
//! Authenticating --wrong password-----> Authenticating (+ transient error)
//! Unlocked --------logout-------------> Authenticating
//! ```

use std::time::Duration;

use strum_macros::Display;

use crate::config::STATUS_MESSAGE_TTL;
use crate::domain::{SiteError, ValidationError};
use crate::settings::{ConfigStore, CredentialStore, MIN_PASSWORD_LEN};
use crate::ui::transient::{StatusMessage, TransientSlot, soonest};
use crate::ui::ui_text::UI_TEXT;
use crate::utils::app_time::AppInstant;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminState {
    /// No credential stored: show the setup form
    SetupRequired,
    /// Credential stored, session locked: show the login form
    Authenticating,
    /// Session unlocked: show the settings screen
    Unlocked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum BadgeState {
    Configured,
    Active,
    #[strum(to_string = "Not Configured")]
    NotConfigured,
}

impl BadgeState {
    pub fn is_set(self) -> bool {
        !matches!(self, BadgeState::NotConfigured)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingsBadges {
    pub webhook: BadgeState,
    pub download: BadgeState,
}

pub struct AdminController {
    credentials: CredentialStore,
    config: ConfigStore,
    state: AdminState,

    // Form fields, bound directly to text inputs
    pub new_password: String,
    pub confirm_password: String,
    pub password: String,
    pub webhook_input: String,
    pub download_input: String,
    pub show_help: bool,

    setup_error: TransientSlot<String>,
    login_error: TransientSlot<String>,
    webhook_status: TransientSlot<StatusMessage>,
    download_status: TransientSlot<StatusMessage>,

    badges: SettingsBadges,
    active_download_url: Option<String>,
}

impl AdminController {
    /// Picks the initial screen from what the stores already hold. A non-empty
    /// `default_password` is stored first if no credential exists yet.
    pub fn new(
        credentials: CredentialStore,
        config: ConfigStore,
        default_password: Option<&str>,
    ) -> Self {
        if let Some(default_password) = default_password {
            match credentials.seed_default(default_password) {
                Ok(true) => log::info!("Admin password seeded from site configuration"),
                Ok(false) => {}
                Err(e) => log::warn!("Ignoring configured admin password: {}", e),
            }
        }

        let mut controller = Self {
            credentials,
            config,
            state: AdminState::SetupRequired,
            new_password: String::new(),
            confirm_password: String::new(),
            password: String::new(),
            webhook_input: String::new(),
            download_input: String::new(),
            show_help: false,
            setup_error: TransientSlot::new(STATUS_MESSAGE_TTL),
            login_error: TransientSlot::new(STATUS_MESSAGE_TTL),
            webhook_status: TransientSlot::new(STATUS_MESSAGE_TTL),
            download_status: TransientSlot::new(STATUS_MESSAGE_TTL),
            badges: SettingsBadges {
                webhook: BadgeState::NotConfigured,
                download: BadgeState::NotConfigured,
            },
            active_download_url: None,
        };

        if controller.credentials.has_credential() {
            if controller.credentials.is_unlocked() {
                controller.enter_unlocked();
            } else {
                controller.state = AdminState::Authenticating;
            }
        }
        controller
    }

    pub fn state(&self) -> AdminState {
        self.state
    }

    pub fn submit_setup(&mut self, now: AppInstant) -> Result<(), SiteError> {
        if self.state != AdminState::SetupRequired {
            return Ok(());
        }

        let result = self.try_setup();
        if let Err(e) = &result {
            self.setup_error.show(e.to_string(), now);
        }
        result
    }

    fn try_setup(&mut self) -> Result<(), SiteError> {
        if self.new_password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort.into());
        }
        if self.new_password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch.into());
        }

        self.credentials.set_credential(&self.new_password)?;
        self.new_password.clear();
        self.confirm_password.clear();
        self.credentials.unlock_session()?;

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions {
            log::info!("[admin] password created, session unlocked");
        }
        self.enter_unlocked();
        Ok(())
    }

    pub fn submit_login(&mut self, now: AppInstant) -> Result<(), SiteError> {
        if self.state != AdminState::Authenticating {
            return Ok(());
        }

        if !self.credentials.verify(&self.password) {
            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_ui_interactions {
                log::info!("[admin] login rejected");
            }
            self.login_error.show(SiteError::Authentication.to_string(), now);
            return Err(SiteError::Authentication);
        }

        if let Err(e) = self.credentials.unlock_session() {
            self.login_error.show(e.to_string(), now);
            return Err(e);
        }
        self.password.clear();
        self.enter_unlocked();
        Ok(())
    }

    pub fn logout(&mut self) {
        if let Err(e) = self.credentials.lock() {
            log::warn!("Could not clear admin session flag: {}", e);
        }
        self.password.clear();
        self.show_help = false;
        self.state = if self.credentials.has_credential() {
            AdminState::Authenticating
        } else {
            AdminState::SetupRequired
        };
    }

    fn enter_unlocked(&mut self) {
        self.state = AdminState::Unlocked;

        if let Some(url) = self.config.stored_webhook_url() {
            self.webhook_input = url;
        }
        self.active_download_url = self.config.stored_download_url();
        if let Some(url) = &self.active_download_url {
            self.download_input = url.clone();
        }
        self.refresh_badges();
    }

    fn ensure_unlocked(&self) -> Result<(), SiteError> {
        if self.state == AdminState::Unlocked {
            Ok(())
        } else {
            Err(SiteError::Authentication)
        }
    }

    pub fn save_webhook(&mut self, now: AppInstant) -> Result<(), SiteError> {
        self.ensure_unlocked()?;

        let result = self.config.set_webhook_url(&self.webhook_input);
        match &result {
            Ok(url) => {
                log::info!("Signup webhook URL saved: {}", url);
                self.webhook_input = url.clone();
                self.webhook_status
                    .show(StatusMessage::success(UI_TEXT.saved_status), now);
            }
            Err(e) => self.webhook_status.show(StatusMessage::error(e.to_string()), now),
        }
        self.refresh_badges();
        result.map(|_| ())
    }

    pub fn save_download(&mut self, now: AppInstant) -> Result<(), SiteError> {
        self.ensure_unlocked()?;

        let result = self.config.set_download_url(&self.download_input);
        match &result {
            Ok(url) => {
                log::info!("Download URL saved: {}", url);
                self.download_input = url.clone();
                self.active_download_url = Some(url.clone());
                self.download_status
                    .show(StatusMessage::success(UI_TEXT.saved_status), now);
            }
            Err(e) => self
                .download_status
                .show(StatusMessage::error(e.to_string()), now),
        }
        self.refresh_badges();
        result.map(|_| ())
    }

    pub fn remove_download(&mut self, now: AppInstant) -> Result<(), SiteError> {
        self.ensure_unlocked()?;

        if let Err(e) = self.config.remove_download_url() {
            self.download_status
                .show(StatusMessage::error(e.to_string()), now);
            return Err(e);
        }
        log::info!("Download URL removed");
        self.download_input.clear();
        self.active_download_url = None;
        self.download_status
            .show(StatusMessage::success(UI_TEXT.removed_status), now);
        self.refresh_badges();
        Ok(())
    }

    fn refresh_badges(&mut self) {
        self.badges = SettingsBadges {
            webhook: if self.config.stored_webhook_url().is_some() {
                BadgeState::Configured
            } else {
                BadgeState::NotConfigured
            },
            download: if self.config.stored_download_url().is_some() {
                BadgeState::Active
            } else {
                BadgeState::NotConfigured
            },
        };
    }

    pub fn badges(&self) -> SettingsBadges {
        self.badges
    }

    /// Download link currently in effect, shown under the settings form.
    pub fn active_download_url(&self) -> Option<&str> {
        self.active_download_url.as_deref()
    }

    pub fn setup_error(&self, now: AppInstant) -> Option<&str> {
        self.setup_error.get(now).map(String::as_str)
    }

    pub fn login_error(&self, now: AppInstant) -> Option<&str> {
        self.login_error.get(now).map(String::as_str)
    }

    pub fn webhook_status(&self, now: AppInstant) -> Option<&StatusMessage> {
        self.webhook_status.get(now)
    }

    pub fn download_status(&self, now: AppInstant) -> Option<&StatusMessage> {
        self.download_status.get(now)
    }

    /// When the next visible message expires, so the host can repaint then.
    pub fn next_expiry(&self, now: AppInstant) -> Option<Duration> {
        soonest([
            self.setup_error.time_left(now),
            self.login_error.time_left(now),
            self.webhook_status.time_left(now),
            self.download_status.time_left(now),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{STORAGE_KEYS, SiteConfig};
    use crate::storage::StorageScopes;
    use crate::ui::transient::StatusKind;
    use crate::utils::app_time::now;

    fn stores(scopes: &StorageScopes) -> (CredentialStore, ConfigStore) {
        (
            CredentialStore::new(scopes.persistent.clone(), scopes.session.clone()),
            ConfigStore::new(scopes.persistent.clone(), SiteConfig::default()),
        )
    }

    fn controller(scopes: &StorageScopes) -> AdminController {
        let (creds, config) = stores(scopes);
        AdminController::new(creds, config, None)
    }

    fn unlocked(scopes: &StorageScopes) -> AdminController {
        let (creds, _) = stores(scopes);
        creds.set_credential("abcd").unwrap();
        creds.unlock_session().unwrap();
        controller(scopes)
    }

    #[test]
    fn fresh_state_shows_setup_and_setup_unlocks() {
        let scopes = StorageScopes::in_memory();
        let mut admin = controller(&scopes);
        assert_eq!(admin.state(), AdminState::SetupRequired);

        admin.new_password = "abcd".to_string();
        admin.confirm_password = "abcd".to_string();
        admin.submit_setup(now()).unwrap();

        assert_eq!(admin.state(), AdminState::Unlocked);
        assert!(admin.new_password.is_empty());
        assert!(admin.confirm_password.is_empty());
        let (creds, _) = stores(&scopes);
        assert!(creds.has_credential());
        assert!(creds.verify("abcd"));
        assert!(creds.is_unlocked());
    }

    #[test]
    fn setup_rejects_short_and_mismatched_passwords() {
        let scopes = StorageScopes::in_memory();
        let mut admin = controller(&scopes);
        let t0 = now();

        admin.new_password = "abc".to_string();
        admin.confirm_password = "abc".to_string();
        assert_eq!(
            admin.submit_setup(t0),
            Err(SiteError::Validation(ValidationError::PasswordTooShort))
        );
        assert_eq!(
            admin.setup_error(t0),
            Some("Password must be at least 4 characters")
        );

        admin.new_password = "abcd".to_string();
        admin.confirm_password = "abce".to_string();
        assert_eq!(
            admin.submit_setup(t0),
            Err(SiteError::Validation(ValidationError::PasswordMismatch))
        );
        assert_eq!(admin.setup_error(t0), Some("Passwords do not match"));

        assert_eq!(admin.state(), AdminState::SetupRequired);
        assert!(!scopes.persistent.borrow().contains(STORAGE_KEYS.credential_hash));
    }

    #[test]
    fn wrong_password_stays_on_login_with_transient_error() {
        let scopes = StorageScopes::in_memory();
        let (creds, _) = stores(&scopes);
        creds.set_credential("abcd").unwrap();
        let mut admin = controller(&scopes);
        assert_eq!(admin.state(), AdminState::Authenticating);

        let t0 = now();
        admin.password = "wrong".to_string();
        assert_eq!(admin.submit_login(t0), Err(SiteError::Authentication));

        assert_eq!(admin.state(), AdminState::Authenticating);
        assert_eq!(admin.login_error(t0), Some("Incorrect password"));
        assert_eq!(
            admin.login_error(t0 + Duration::from_millis(2_900)),
            Some("Incorrect password")
        );
        assert_eq!(admin.login_error(t0 + Duration::from_secs(3)), None);
    }

    #[test]
    fn correct_password_unlocks_and_logout_relocks() {
        let scopes = StorageScopes::in_memory();
        let (creds, _) = stores(&scopes);
        creds.set_credential("abcd").unwrap();
        let mut admin = controller(&scopes);

        admin.password = "abcd".to_string();
        admin.submit_login(now()).unwrap();
        assert_eq!(admin.state(), AdminState::Unlocked);
        assert!(admin.password.is_empty());

        admin.logout();
        assert_eq!(admin.state(), AdminState::Authenticating);
        assert!(!creds.is_unlocked());
    }

    #[test]
    fn unlocked_session_survives_reload() {
        let scopes = StorageScopes::in_memory();
        let admin = unlocked(&scopes);
        assert_eq!(admin.state(), AdminState::Unlocked);

        // Same tab, new page load: a fresh controller over the same stores
        let reloaded = controller(&scopes);
        assert_eq!(reloaded.state(), AdminState::Unlocked);
    }

    #[test]
    fn new_tab_requires_login() {
        let scopes = StorageScopes::in_memory();
        let _ = unlocked(&scopes);

        let new_tab = StorageScopes::new(
            scopes.persistent.clone(),
            crate::storage::shared(crate::storage::MemoryStore::default()),
        );
        assert_eq!(controller(&new_tab).state(), AdminState::Authenticating);
    }

    #[test]
    fn unlocking_loads_stored_settings_and_badges() {
        let scopes = StorageScopes::in_memory();
        let (_, config) = stores(&scopes);
        config.set_webhook_url("https://hooks.example.com/exec").unwrap();

        let admin = unlocked(&scopes);

        assert_eq!(admin.webhook_input, "https://hooks.example.com/exec");
        assert!(admin.download_input.is_empty());
        assert_eq!(admin.active_download_url(), None);
        assert_eq!(
            admin.badges(),
            SettingsBadges {
                webhook: BadgeState::Configured,
                download: BadgeState::NotConfigured,
            }
        );
        assert_eq!(admin.badges().webhook.to_string(), "Configured");
        assert_eq!(admin.badges().download.to_string(), "Not Configured");
    }

    #[test]
    fn saving_updates_status_and_badges() {
        let scopes = StorageScopes::in_memory();
        let mut admin = unlocked(&scopes);
        let t0 = now();

        admin.download_input = " https://example.com/f.zip ".to_string();
        admin.save_download(t0).unwrap();

        assert_eq!(admin.download_input, "https://example.com/f.zip");
        assert_eq!(admin.active_download_url(), Some("https://example.com/f.zip"));
        assert_eq!(admin.badges().download, BadgeState::Active);
        assert_eq!(admin.badges().download.to_string(), "Active");
        let status = admin.download_status(t0).unwrap();
        assert_eq!(status.kind, StatusKind::Success);
        assert_eq!(status.text, "✓ Saved successfully");
        assert_eq!(admin.download_status(t0 + Duration::from_secs(3)), None);
    }

    #[test]
    fn invalid_url_is_rejected_and_previous_kept() {
        let scopes = StorageScopes::in_memory();
        let mut admin = unlocked(&scopes);
        let t0 = now();

        admin.webhook_input = "https://hooks.example.com/exec".to_string();
        admin.save_webhook(t0).unwrap();

        admin.webhook_input = "not-a-url".to_string();
        assert!(admin.save_webhook(t0).is_err());
        let status = admin.webhook_status(t0).unwrap();
        assert_eq!(status.kind, StatusKind::Error);
        assert_eq!(status.text, "Please enter a valid URL");

        admin.webhook_input = "   ".to_string();
        assert!(admin.save_webhook(t0).is_err());
        assert_eq!(admin.webhook_status(t0).unwrap().text, "Please enter a URL");

        let (_, config) = stores(&scopes);
        assert_eq!(
            config.webhook_url().as_deref(),
            Some("https://hooks.example.com/exec")
        );
        assert_eq!(admin.badges().webhook, BadgeState::Configured);
    }

    #[test]
    fn remove_download_resets_badge() {
        let scopes = StorageScopes::in_memory();
        let mut admin = unlocked(&scopes);
        let t0 = now();
        admin.download_input = "https://example.com/f.zip".to_string();
        admin.save_download(t0).unwrap();

        admin.remove_download(t0).unwrap();

        let (_, config) = stores(&scopes);
        assert_eq!(config.download_url(), None);
        assert!(admin.download_input.is_empty());
        assert_eq!(admin.active_download_url(), None);
        assert_eq!(admin.badges().download, BadgeState::NotConfigured);
        assert_eq!(
            admin.download_status(t0).unwrap().text,
            "✓ Download link removed"
        );
    }

    #[test]
    fn settings_writes_require_unlocked_session() {
        let scopes = StorageScopes::in_memory();
        let mut admin = controller(&scopes);
        admin.webhook_input = "https://hooks.example.com/exec".to_string();

        assert_eq!(admin.save_webhook(now()), Err(SiteError::Authentication));
        let (_, config) = stores(&scopes);
        assert_eq!(config.webhook_url(), None);
    }

    #[test]
    fn configured_default_password_seeds_login() {
        let scopes = StorageScopes::in_memory();
        let (creds, config) = stores(&scopes);
        let mut admin = AdminController::new(creds, config, Some("nextlevel2024"));
        assert_eq!(admin.state(), AdminState::Authenticating);

        admin.password = "nextlevel2024".to_string();
        admin.submit_login(now()).unwrap();
        assert_eq!(admin.state(), AdminState::Unlocked);
    }

    #[test]
    fn next_expiry_tracks_soonest_message() {
        let scopes = StorageScopes::in_memory();
        let mut admin = unlocked(&scopes);
        let t0 = now();
        assert_eq!(admin.next_expiry(t0), None);

        admin.webhook_input = "nope".to_string();
        let _ = admin.save_webhook(t0);
        assert_eq!(
            admin.next_expiry(t0 + Duration::from_secs(1)),
            Some(Duration::from_secs(2))
        );
    }
}
