//! Persistent credential record: session token plus cached user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only code that serializes or deserializes the persisted record.
//! The session controller hydrates from it once at startup and the profile
//! cache falls back to it when the remote profile fetch fails.
//!
//! ERROR HANDLING
//! ==============
//! A malformed user record never propagates as a failure from the plain
//! getters; it reads as absent. `read_user` exposes the corruption so the
//! caller can decide to clear it.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;

use std::sync::Arc;

use crate::error::StorageError;
use crate::net::types::User;
use crate::util::storage::KeyValueStorage;

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user_data";

#[derive(Clone)]
pub struct CredentialStore {
    storage: Arc<dyn KeyValueStorage>,
}

impl CredentialStore {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    pub fn get_stored_token(&self) -> Option<String> {
        self.storage.get_item(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    pub fn get_stored_user(&self) -> Option<User> {
        match self.read_user() {
            Ok(user) => user,
            Err(e) => {
                log::warn!("{e}");
                None
            }
        }
    }

    /// Read the cached user, reporting a malformed record.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Corrupt`] when the stored text is not a valid
    /// user record.
    pub fn read_user(&self) -> Result<Option<User>, StorageError> {
        let Some(raw) = self.storage.get_item(USER_KEY) else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| StorageError::Corrupt { key: USER_KEY, reason: e.to_string() })
    }

    pub fn set_stored_token(&self, token: &str) {
        self.storage.set_item(TOKEN_KEY, token);
    }

    pub fn set_stored_user(&self, user: &User) {
        match serde_json::to_string(user) {
            Ok(raw) => self.storage.set_item(USER_KEY, &raw),
            Err(e) => log::error!("failed to serialize user record: {e}"),
        }
    }

    pub fn clear(&self) {
        self.storage.remove_item(TOKEN_KEY);
        self.storage.remove_item(USER_KEY);
    }
}

impl std::fmt::Debug for CredentialStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialStore").finish_non_exhaustive()
    }
}
