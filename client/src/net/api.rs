//! REST client for the remote authentication API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, each bounded by the
//! configured request timeout.
//! Server-side (SSR) and native tests: calls report `Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so auth/profile failures
//! degrade UI behavior without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::types::{LoginRequest, LoginResponse, ProfileResponse};
use crate::config::ClientConfig;
use crate::error::{ApiError, AuthError};

pub const LOGIN_PATH: &str = "auth/login";
pub const LOGOUT_PATH: &str = "auth/logout";
pub const PROFILE_PATH: &str = "auth/profile";

/// Remote authentication collaborator.
///
/// Futures are not `Send`: everything runs on the browser's single event
/// loop.
#[async_trait(?Send)]
pub trait AuthApi: Send + Sync {
    /// Exchange credentials for a token and user.
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, AuthError>;

    /// Best-effort server-side session teardown. Never fails the caller.
    async fn logout(&self, token: Option<String>);

    /// Fetch the full profile of the user owning `token`.
    async fn get_profile(&self, token: Option<String>) -> Result<ProfileResponse, ApiError>;
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Map a non-OK login status to an [`AuthError`].
#[cfg(any(test, feature = "hydrate"))]
fn login_status_error(status: u16) -> AuthError {
    match status {
        400 | 401 | 403 => AuthError::InvalidCredentials,
        other => AuthError::Network(format!("status {other}")),
    }
}

/// HTTP implementation of [`AuthApi`].
#[derive(Clone, Debug, Default)]
pub struct HttpAuthApi {
    config: ClientConfig,
}

impl HttpAuthApi {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

/// Race `fut` against a timer; `None` when the timer wins.
#[cfg(feature = "hydrate")]
async fn with_timeout<F: std::future::Future>(timeout: std::time::Duration, fut: F) -> Option<F::Output> {
    use futures::future::{Either, select};

    let fut = std::pin::pin!(fut);
    let timer = std::pin::pin!(gloo_timers::future::sleep(timeout));
    match select(fut, timer).await {
        Either::Left((output, _)) => Some(output),
        Either::Right(_) => None,
    }
}

#[cfg(feature = "hydrate")]
async fn post_login(url: &str, request: &LoginRequest) -> Result<LoginResponse, AuthError> {
    let resp = gloo_net::http::Request::post(url)
        .json(request)
        .map_err(|e| AuthError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| AuthError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(login_status_error(resp.status()));
    }
    resp.json::<LoginResponse>()
        .await
        .map_err(|e| AuthError::Network(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn get_profile_response(url: &str, token: Option<&str>) -> Result<ProfileResponse, ApiError> {
    let mut builder = gloo_net::http::Request::get(url);
    if let Some(token) = token {
        builder = builder.header("Authorization", &bearer(token));
    }
    let resp = builder.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    resp.json::<ProfileResponse>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl AuthApi for HttpAuthApi {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.config.endpoint(LOGIN_PATH);
            with_timeout(self.config.request_timeout(), post_login(&url, request))
                .await
                .unwrap_or(Err(AuthError::Timeout))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(AuthError::Unavailable)
        }
    }

    async fn logout(&self, token: Option<String>) {
        #[cfg(feature = "hydrate")]
        {
            let url = self.config.endpoint(LOGOUT_PATH);
            let mut builder = gloo_net::http::Request::post(&url);
            if let Some(token) = token.as_deref() {
                builder = builder.header("Authorization", &bearer(token));
            }
            match with_timeout(self.config.request_timeout(), builder.send()).await {
                Some(Ok(_)) => {}
                Some(Err(e)) => log::debug!("server logout failed: {e}"),
                None => log::debug!("server logout timed out"),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }

    async fn get_profile(&self, token: Option<String>) -> Result<ProfileResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.config.endpoint(PROFILE_PATH);
            with_timeout(self.config.request_timeout(), get_profile_response(&url, token.as_deref()))
                .await
                .unwrap_or(Err(ApiError::Timeout))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            Err(ApiError::Unavailable)
        }
    }
}
