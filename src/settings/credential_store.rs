//! Single shared admin secret plus a tab-scoped "unlocked" flag.
//!
//! The stored value is `domain::simple_hash` of the password, which is not a
//! cryptographic hash. Anyone with access to the persistent store can recover
//! or forge it. Treat the admin screen as a convenience gate, not a security
//! boundary.

use crate::config::STORAGE_KEYS;
use crate::domain::{SiteError, ValidationError, simple_hash};
use crate::storage::SharedStore;

/// Shortest password accepted by `set_credential`, in characters.
pub const MIN_PASSWORD_LEN: usize = 4;

const UNLOCKED_VALUE: &str = "true";

#[derive(Clone)]
pub struct CredentialStore {
    persistent: SharedStore,
    session: SharedStore,
}

impl CredentialStore {
    pub fn new(persistent: SharedStore, session: SharedStore) -> Self {
        Self {
            persistent,
            session,
        }
    }

    pub fn has_credential(&self) -> bool {
        self.persistent
            .borrow()
            .contains(STORAGE_KEYS.credential_hash)
    }

    /// Replaces the stored credential. Too-short passwords leave any
    /// existing credential untouched.
    pub fn set_credential(&self, plaintext: &str) -> Result<(), SiteError> {
        if plaintext.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort.into());
        }
        self.persistent
            .borrow_mut()
            .set(STORAGE_KEYS.credential_hash, &simple_hash(plaintext))
    }

    /// Stores `default_password` only when no credential exists yet.
    /// Returns whether a credential was written.
    pub fn seed_default(&self, default_password: &str) -> Result<bool, SiteError> {
        if self.has_credential() {
            return Ok(false);
        }
        self.set_credential(default_password)?;
        Ok(true)
    }

    pub fn verify(&self, plaintext: &str) -> bool {
        match self.persistent.borrow().get(STORAGE_KEYS.credential_hash) {
            Some(stored) => stored == simple_hash(plaintext),
            None => false,
        }
    }

    pub fn unlock_session(&self) -> Result<(), SiteError> {
        self.session
            .borrow_mut()
            .set(STORAGE_KEYS.unlocked_flag, UNLOCKED_VALUE)
    }

    pub fn is_unlocked(&self) -> bool {
        self.session.borrow().contains(STORAGE_KEYS.unlocked_flag)
    }

    pub fn lock(&self) -> Result<(), SiteError> {
        self.session.borrow_mut().remove(STORAGE_KEYS.unlocked_flag)
    }
}
