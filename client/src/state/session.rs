//! Auth-session state for the current browser tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login
//! redirects and identity-dependent rendering. `App` builds one
//! [`SessionController`] at startup and hands it down through a single
//! context boundary.
//!
//! DESIGN
//! ======
//! The phase is derived from the fields, never stored: a session is
//! authenticated only when both token and user are present, and it is
//! hydrating until the one-shot storage read has run.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use leptos::prelude::*;

use crate::error::AuthError;
use crate::net::api::AuthApi;
use crate::net::types::{LoginRequest, User, UserPatch};
use crate::state::credentials::CredentialStore;

/// Lifecycle phase derived from [`SessionState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    Hydrating,
    Authenticated,
    Anonymous,
}

/// In-memory session: bearer token and minimal user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub token: Option<String>,
    pub user: Option<User>,
    pub hydrated: bool,
}

impl SessionState {
    fn authenticated(token: String, user: User) -> Self {
        Self { token: Some(token), user: Some(user), hydrated: true }
    }

    fn anonymous() -> Self {
        Self { token: None, user: None, hydrated: true }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    pub fn phase(&self) -> SessionPhase {
        if !self.hydrated {
            SessionPhase::Hydrating
        } else if self.is_authenticated() {
            SessionPhase::Authenticated
        } else {
            SessionPhase::Anonymous
        }
    }
}

/// Owner of the authentication lifecycle.
#[derive(Clone)]
pub struct SessionController {
    state: ArcRwSignal<SessionState>,
    store: CredentialStore,
    api: Arc<dyn AuthApi>,
}

impl SessionController {
    pub fn new(store: CredentialStore, api: Arc<dyn AuthApi>) -> Self {
        Self { state: ArcRwSignal::new(SessionState::default()), store, api }
    }

    /// Reactive handle to the session state.
    pub fn state(&self) -> ArcRwSignal<SessionState> {
        self.state.clone()
    }

    /// Current state without subscribing.
    pub fn snapshot(&self) -> SessionState {
        self.state.get_untracked()
    }

    pub fn phase(&self) -> SessionPhase {
        self.state.with(SessionState::phase)
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(SessionState::is_authenticated)
    }

    pub fn user(&self) -> Option<User> {
        self.state.with(|s| s.user.clone())
    }

    pub fn store(&self) -> &CredentialStore {
        &self.store
    }

    pub fn api(&self) -> Arc<dyn AuthApi> {
        Arc::clone(&self.api)
    }

    /// Rebuild the session from the credential store. Runs once; later
    /// calls are ignored.
    ///
    /// A corrupt or partial record settles as anonymous and is cleared.
    pub fn hydrate(&self) {
        if self.state.with_untracked(|s| s.hydrated) {
            return;
        }
        let token = self.store.get_stored_token();
        match (token, self.store.read_user()) {
            (Some(token), Ok(Some(user))) => {
                log::debug!("session restored for user {}", user.id);
                self.state.set(SessionState::authenticated(token, user));
            }
            (None, Ok(None)) => self.state.set(SessionState::anonymous()),
            (_, Err(e)) => {
                log::warn!("discarding stored session: {e}");
                self.clear_local();
            }
            (token, Ok(user)) => {
                log::warn!(
                    "discarding partial stored session (token: {}, user: {})",
                    token.is_some(),
                    user.is_some()
                );
                self.clear_local();
            }
        }
    }

    /// Authenticate with the remote API and persist the session.
    ///
    /// # Errors
    ///
    /// Returns the collaborator's [`AuthError`] unchanged; existing session
    /// state is left untouched on failure. A response with a blank token is
    /// rejected, since the store would not read it back.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let request = LoginRequest { email: email.to_owned(), password: password.to_owned() };
        let response = self
            .api
            .login(&request)
            .await
            .inspect_err(|e| log::info!("login rejected: {e}"))?;

        if response.token.trim().is_empty() {
            log::warn!("login response for user {} carried no token", response.user.id);
            return Err(AuthError::Network("login response carried no token".to_owned()));
        }

        self.store.set_stored_token(&response.token);
        self.store.set_stored_user(&response.user);
        self.state.set(SessionState::authenticated(response.token, response.user.clone()));
        Ok(response.user)
    }

    /// Drop the session locally and ask the server to forget it.
    pub fn logout(&self) {
        let remote = self.begin_logout();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(remote);
        #[cfg(not(feature = "hydrate"))]
        drop(remote);
    }

    /// Clear the local session immediately and return the server-side
    /// teardown, carrying the token that was active before the clear.
    pub fn begin_logout(&self) -> impl Future<Output = ()> + 'static {
        let token = self.state.with_untracked(|s| s.token.clone());
        self.clear_local();

        let api = self.api();
        async move { api.logout(token).await }
    }

    /// Merge `patch` into the current user and persist the result.
    /// No-op without a user.
    pub fn update_user(&self, patch: UserPatch) {
        let Some(mut user) = self.state.with_untracked(|s| s.user.clone()) else {
            return;
        };
        patch.apply_to(&mut user);
        self.store.set_stored_user(&user);
        self.state.update(|s| s.user = Some(user));
    }

    fn clear_local(&self) {
        self.state.set(SessionState::anonymous());
        self.store.clear();
    }
}

impl std::fmt::Debug for SessionController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionController")
            .field("state", &self.snapshot())
            .finish_non_exhaustive()
    }
}

/// Make `session` available to descendant components.
pub fn provide_session(session: SessionController) {
    provide_context(session);
}

/// The session provided by `App`.
///
/// # Panics
///
/// Panics when called outside the `App` tree.
pub fn use_session() -> SessionController {
    expect_context::<SessionController>()
}
