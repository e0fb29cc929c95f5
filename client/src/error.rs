//! Error types for the session core.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here is fatal. Storage and profile failures degrade to cached or
//! anonymous state inside the owning module; only [`AuthError`] crosses the
//! public boundary, so the login form can show it inline.

use thiserror::Error;

/// Persisted credential record could not be decoded.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("stored record `{key}` is corrupt: {reason}")]
    Corrupt { key: &'static str, reason: String },
}

/// Login failure surfaced to the caller unchanged.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("Login request failed: {0}")]
    Network(String),
    #[error("Login request timed out")]
    Timeout,
    #[error("Login is not available here")]
    Unavailable,
}

/// Remote profile fetch failure.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed with status {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("request timed out")]
    Timeout,
    #[error("API not available outside the browser")]
    Unavailable,
}
