//! Public landing page behaviour: download gating and the beta signup form.

use std::rc::Rc;
use std::time::Duration;

use poll_promise::Promise;

use crate::config::{CLICK_AFFORDANCE, COMING_SOON_LABEL_TTL, SIGNUP_FEEDBACK_TTL};
use crate::domain::{ValidationError, is_valid_email, is_valid_url};
use crate::net::{SignupPayload, WebhookTransport};
use crate::settings::ConfigStore;
use crate::ui::transient::{StatusMessage, TransientSlot, soonest};
use crate::ui::ui_text::UI_TEXT;
use crate::utils::app_time::AppInstant;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DownloadButtonState {
    pub enabled: bool,
    pub tooltip: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    /// Open this link in a new browsing context
    Open(String),
    /// No usable link; the button shows "Coming Soon..." for a moment
    ComingSoon,
}

/// One download control on the landing page.
pub struct DownloadAction {
    config: ConfigStore,
    button: DownloadButtonState,
    coming_soon: TransientSlot<()>,
    clicked: TransientSlot<()>,
}

impl DownloadAction {
    /// Computes the enabled/tooltip state right away, as on page load.
    pub fn new(config: ConfigStore) -> Self {
        let mut action = Self {
            config,
            button: DownloadButtonState {
                enabled: false,
                tooltip: UI_TEXT.download_tooltip_disabled,
            },
            coming_soon: TransientSlot::new(COMING_SOON_LABEL_TTL),
            clicked: TransientSlot::new(CLICK_AFFORDANCE),
        };
        action.refresh();
        action
    }

    /// Re-reads the configured link and recomputes the button state.
    pub fn refresh(&mut self) {
        self.button = if self.usable_url().is_some() {
            DownloadButtonState {
                enabled: true,
                tooltip: UI_TEXT.download_tooltip_ready,
            }
        } else {
            DownloadButtonState {
                enabled: false,
                tooltip: UI_TEXT.download_tooltip_disabled,
            }
        };
    }

    pub fn button_state(&self) -> DownloadButtonState {
        self.button
    }

    fn usable_url(&self) -> Option<String> {
        self.config.download_url().filter(|url| is_valid_url(url))
    }

    /// Reads the link at click time, so a link saved after page load is used.
    pub fn invoke(&mut self, now: AppInstant) -> DownloadOutcome {
        match self.usable_url() {
            Some(url) => {
                log::info!("Download initiated: {}", url);
                self.clicked.show((), now);
                DownloadOutcome::Open(url)
            }
            None => {
                self.coming_soon.show((), now);
                DownloadOutcome::ComingSoon
            }
        }
    }

    pub fn label(&self, now: AppInstant) -> &'static str {
        if self.coming_soon.is_active(now) {
            UI_TEXT.download_coming_soon_label
        } else {
            UI_TEXT.download_button
        }
    }

    pub fn is_clicked(&self, now: AppInstant) -> bool {
        self.clicked.is_active(now)
    }

    pub fn next_expiry(&self, now: AppInstant) -> Option<Duration> {
        soonest([self.coming_soon.time_left(now), self.clicked.time_left(now)])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupOutcome {
    /// Email failed the client-side check; nothing was sent
    Rejected,
    /// Webhook request in flight; success is shown once it settles
    Sending,
    /// Success shown and form reset
    Completed,
}

/// Beta signup form. Delivery problems never reach the user: any settled
/// webhook dispatch counts as a successful signup.
pub struct SignupForm {
    config: ConfigStore,
    transport: Rc<dyn WebhookTransport>,
    pub email: String,
    feedback: TransientSlot<StatusMessage>,
    pending: Option<Promise<()>>,
}

impl SignupForm {
    pub fn new(config: ConfigStore, transport: Rc<dyn WebhookTransport>) -> Self {
        Self {
            config,
            transport,
            email: String::new(),
            feedback: TransientSlot::new(SIGNUP_FEEDBACK_TTL),
            pending: None,
        }
    }

    pub fn submit(&mut self, now: AppInstant) -> SignupOutcome {
        if self.pending.is_some() {
            return SignupOutcome::Sending;
        }

        let email = self.email.trim().to_string();
        if !is_valid_email(&email) {
            self.feedback.show(
                StatusMessage::error(ValidationError::InvalidEmail.to_string()),
                now,
            );
            return SignupOutcome::Rejected;
        }

        match self.config.webhook_url() {
            Some(url) => {
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_ui_interactions {
                    log::info!("[signup] dispatching {email}");
                }
                self.pending = Some(self.transport.dispatch(&url, SignupPayload { email }));
                SignupOutcome::Sending
            }
            None => {
                log::info!("Beta signup (no endpoint configured): {}", email);
                self.complete(now);
                SignupOutcome::Completed
            }
        }
    }

    /// Call once per frame. Returns true when an in-flight signup settled.
    pub fn poll(&mut self, now: AppInstant) -> bool {
        let settled = self
            .pending
            .as_ref()
            .is_some_and(|promise| promise.ready().is_some());
        if settled {
            self.pending = None;
            self.complete(now);
        }
        settled
    }

    fn complete(&mut self, now: AppInstant) {
        self.feedback
            .show(StatusMessage::success(UI_TEXT.beta_success), now);
        self.email.clear();
    }

    pub fn is_sending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn feedback(&self, now: AppInstant) -> Option<&StatusMessage> {
        self.feedback.get(now)
    }

    pub fn next_expiry(&self, now: AppInstant) -> Option<Duration> {
        self.feedback.time_left(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    use crate::config::SiteConfig;
    use crate::storage::StorageScopes;
    use crate::ui::transient::StatusKind;
    use crate::utils::app_time::now;

    #[derive(Default)]
    struct RecordingTransport {
        calls: RefCell<Vec<(String, SignupPayload)>>,
        hold: bool,
    }

    impl WebhookTransport for RecordingTransport {
        fn dispatch(&self, url: &str, payload: SignupPayload) -> Promise<()> {
            self.calls.borrow_mut().push((url.to_string(), payload));
            if self.hold {
                // Polling panics once the sender is dropped, so leak it to stay pending
                let (sender, promise) = Promise::new();
                std::mem::forget(sender);
                promise
            } else {
                Promise::from_ready(())
            }
        }
    }

    fn config_store() -> ConfigStore {
        ConfigStore::new(StorageScopes::in_memory().persistent, SiteConfig::default())
    }

    fn form_with(config: ConfigStore, transport: &Rc<RecordingTransport>) -> SignupForm {
        let transport: Rc<dyn WebhookTransport> = transport.clone();
        SignupForm::new(config, transport)
    }

    #[test]
    fn download_disabled_without_valid_url() {
        let config = config_store();
        let mut action = DownloadAction::new(config.clone());
        let t0 = now();

        assert_eq!(
            action.button_state(),
            DownloadButtonState {
                enabled: false,
                tooltip: "Download coming soon"
            }
        );

        assert_eq!(action.invoke(t0), DownloadOutcome::ComingSoon);
        assert_eq!(action.label(t0), "Coming Soon...");
        assert_eq!(action.label(t0 + Duration::from_millis(1_999)), "Coming Soon...");
        assert_eq!(action.label(t0 + Duration::from_secs(2)), "Download Beta");
        assert!(!action.is_clicked(t0));
    }

    #[test]
    fn rejected_url_leaves_download_disabled() {
        let config = config_store();
        assert!(config.set_download_url("not-a-url").is_err());

        let action = DownloadAction::new(config);
        assert!(!action.button_state().enabled);
        assert_eq!(action.button_state().tooltip, "Download coming soon");
    }

    #[test]
    fn valid_url_opens_and_flashes_clicked() {
        let config = config_store();
        config.set_download_url("https://example.com/f.zip").unwrap();
        let mut action = DownloadAction::new(config);
        let t0 = now();

        assert_eq!(
            action.button_state(),
            DownloadButtonState {
                enabled: true,
                tooltip: "Download the latest version"
            }
        );
        assert_eq!(
            action.invoke(t0),
            DownloadOutcome::Open("https://example.com/f.zip".to_string())
        );
        assert!(action.is_clicked(t0 + Duration::from_millis(299)));
        assert!(!action.is_clicked(t0 + Duration::from_millis(300)));
        assert_eq!(action.label(t0), "Download Beta");
    }

    #[test]
    fn refresh_picks_up_later_changes() {
        let config = config_store();
        let mut action = DownloadAction::new(config.clone());
        assert!(!action.button_state().enabled);

        config.set_download_url("https://example.com/f.zip").unwrap();
        action.refresh();
        assert!(action.button_state().enabled);

        config.remove_download_url().unwrap();
        action.refresh();
        assert!(!action.button_state().enabled);
    }

    #[test]
    fn bad_email_shows_error_without_network() {
        let config = config_store();
        config.set_webhook_url("https://hooks.example.com/exec").unwrap();
        let transport = Rc::new(RecordingTransport::default());
        let mut form = form_with(config, &transport);
        let t0 = now();

        form.email = "bad-email".to_string();
        assert_eq!(form.submit(t0), SignupOutcome::Rejected);

        let feedback = form.feedback(t0).unwrap();
        assert_eq!(feedback.kind, StatusKind::Error);
        assert_eq!(feedback.text, "Please enter a valid email address.");
        assert_eq!(form.email, "bad-email");
        assert!(transport.calls.borrow().is_empty());
    }

    #[test]
    fn no_webhook_completes_without_network() {
        let transport = Rc::new(RecordingTransport::default());
        let mut form = form_with(config_store(), &transport);
        let t0 = now();

        form.email = "user@example.com".to_string();
        assert_eq!(form.submit(t0), SignupOutcome::Completed);

        let feedback = form.feedback(t0).unwrap();
        assert_eq!(feedback.kind, StatusKind::Success);
        assert_eq!(feedback.text, UI_TEXT.beta_success);
        assert!(form.email.is_empty());
        assert!(transport.calls.borrow().is_empty());
        assert_eq!(form.feedback(t0 + Duration::from_secs(5)), None);
    }

    #[test]
    fn webhook_receives_trimmed_email_then_success() {
        let config = config_store();
        config.set_webhook_url("https://hooks.example.com/exec").unwrap();
        let transport = Rc::new(RecordingTransport::default());
        let mut form = form_with(config, &transport);
        let t0 = now();

        form.email = "  user@example.com ".to_string();
        assert_eq!(form.submit(t0), SignupOutcome::Sending);
        assert!(form.is_sending());
        assert_eq!(
            transport.calls.borrow().as_slice(),
            &[(
                "https://hooks.example.com/exec".to_string(),
                SignupPayload {
                    email: "user@example.com".to_string()
                }
            )]
        );

        assert!(form.poll(t0));
        assert!(!form.is_sending());
        assert!(form.email.is_empty());
        assert_eq!(form.feedback(t0).unwrap().kind, StatusKind::Success);
        assert!(!form.poll(t0));
    }

    #[test]
    fn in_flight_signup_blocks_resubmission() {
        let config = config_store();
        config.set_webhook_url("https://hooks.example.com/exec").unwrap();
        let transport = Rc::new(RecordingTransport {
            hold: true,
            ..Default::default()
        });
        let mut form = form_with(config, &transport);
        let t0 = now();

        form.email = "user@example.com".to_string();
        assert_eq!(form.submit(t0), SignupOutcome::Sending);
        assert_eq!(form.submit(t0), SignupOutcome::Sending);
        assert!(!form.poll(t0));

        assert_eq!(transport.calls.borrow().len(), 1);
        assert_eq!(form.feedback(t0), None);
    }

    #[test]
    fn static_default_webhook_is_used_when_nothing_stored() {
        let config = ConfigStore::new(
            StorageScopes::in_memory().persistent,
            SiteConfig {
                script_url: "https://default.example.com/exec".to_string(),
                ..Default::default()
            },
        );
        let transport = Rc::new(RecordingTransport::default());
        let mut form = form_with(config, &transport);

        form.email = "user@example.com".to_string();
        form.submit(now());

        assert_eq!(
            transport.calls.borrow()[0].0,
            "https://default.example.com/exec"
        );
    }
}
