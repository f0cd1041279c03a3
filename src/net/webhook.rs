//! Fire-and-forget delivery of signup emails to the configured endpoint.
//!
//! Browser builds send with `mode: no-cors`, which hides the response, so the
//! outcome of a submission can never be observed. The policy is therefore
//! explicit: a dispatch always settles to `()`, transport errors are logged
//! and swallowed, and callers treat every settled dispatch as a success.

use poll_promise::Promise;
use serde::Serialize;

use crate::domain::SiteError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignupPayload {
    pub email: String,
}

pub trait WebhookTransport {
    /// Starts a `POST` of `payload` as JSON to `url`. The promise resolves once
    /// the attempt is over, whatever its outcome.
    fn dispatch(&self, url: &str, payload: SignupPayload) -> Promise<()>;
}

/// Real transport built on `reqwest`.
#[derive(Default, Clone)]
pub struct HttpWebhook;

impl HttpWebhook {
    pub fn new() -> Self {
        Self
    }
}

impl WebhookTransport for HttpWebhook {
    #[cfg(not(target_arch = "wasm32"))]
    fn dispatch(&self, url: &str, payload: SignupPayload) -> Promise<()> {
        let url = url.to_string();
        Promise::spawn_thread("signup_webhook", move || {
            #[cfg(debug_assertions)]
            trace_dispatch(&url, &payload);

            let result = reqwest::blocking::Client::new()
                .post(&url)
                .json(&payload)
                .send();
            match result {
                Ok(response) => log::info!(
                    "Beta signup submitted: {} (status {})",
                    payload.email,
                    response.status()
                ),
                Err(e) => swallow(&payload, SiteError::Network(e.to_string())),
            }
        })
    }

    #[cfg(target_arch = "wasm32")]
    fn dispatch(&self, url: &str, payload: SignupPayload) -> Promise<()> {
        let url = url.to_string();
        Promise::spawn_local(async move {
            #[cfg(debug_assertions)]
            trace_dispatch(&url, &payload);

            let result = reqwest::Client::new()
                .post(&url)
                .fetch_mode_no_cors()
                .json(&payload)
                .send()
                .await;
            match result {
                // Opaque response: status is always 0, nothing to inspect
                Ok(_) => log::info!("Beta signup submitted: {}", payload.email),
                Err(e) => swallow(&payload, SiteError::Network(e.to_string())),
            }
        })
    }
}

/// Delivery problems are logged and dropped; the signup still counts as sent.
fn swallow(payload: &SignupPayload, err: SiteError) {
    log::warn!(
        "Beta signup for {} not confirmed, treating as sent: {}",
        payload.email,
        err
    );
}

#[cfg(debug_assertions)]
fn trace_dispatch(url: &str, payload: &SignupPayload) {
    if crate::config::DEBUG_FLAGS.print_webhook {
        log::info!(
            "[webhook] POST {url} {}",
            serde_json::to_string(payload).unwrap_or_default()
        );
    }
}
