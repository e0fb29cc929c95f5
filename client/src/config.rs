//! Client configuration resolved at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle has no process environment, so overrides are baked in
//! with `option_env!` when the client is compiled.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "/api";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 15_000;

/// Settings for the remote authentication API collaborator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub request_timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { api_base_url: DEFAULT_API_BASE_URL.to_owned(), request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS }
    }
}

impl ClientConfig {
    /// Build config from `AGENCY_API_BASE_URL` / `AGENCY_API_TIMEOUT_MS`
    /// captured at compile time.
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("AGENCY_API_BASE_URL"), option_env!("AGENCY_API_TIMEOUT_MS"))
    }

    fn from_values(base_url: Option<&str>, timeout_ms: Option<&str>) -> Self {
        let api_base_url = base_url
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_owned();
        Self { api_base_url, request_timeout_ms: parse_timeout_ms(timeout_ms) }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// Join the base URL with an endpoint path.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }
}

fn parse_timeout_ms(raw: Option<&str>) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|ms| *ms > 0)
        .unwrap_or(DEFAULT_REQUEST_TIMEOUT_MS)
}
