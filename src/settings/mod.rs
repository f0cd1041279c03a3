//! Admin credential and site settings, both backed by injected stores.

pub mod config_store;
pub mod credential_store;

pub use config_store::ConfigStore;
pub use credential_store::{CredentialStore, MIN_PASSWORD_LEN};
