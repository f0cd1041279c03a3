//! Outbound signup webhook.

pub mod webhook;

pub use webhook::{HttpWebhook, SignupPayload, WebhookTransport};
