//! Profile cache for dashboard views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted by `ProfileProvider` inside protected routes. Fetches the remote
//! profile eagerly and falls back to the cached session user when the
//! remote call fails.
//!
//! DESIGN
//! ======
//! Each fetch takes a sequence number. Only the newest fetch may write
//! state, so a slow response to an older refresh cannot overwrite a fresher
//! one. `loading` stays true while any fetch is still outstanding.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use leptos::prelude::*;

use crate::error::ApiError;
use crate::net::api::AuthApi;
use crate::net::types::{Profile, ProfileResponse, User};
use crate::state::credentials::CredentialStore;

pub const NO_PROFILE_MESSAGE: &str = "No profile data available";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileState {
    pub profile: Option<Profile>,
    pub loading: bool,
    pub error: Option<String>,
    pending: usize,
}

/// How a single fetch resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    Remote(Profile),
    Cached(Profile),
    Failed(String),
}

impl FetchOutcome {
    pub fn into_profile(self) -> Option<Profile> {
        match self {
            Self::Remote(profile) | Self::Cached(profile) => Some(profile),
            Self::Failed(_) => None,
        }
    }
}

/// Decide a fetch's outcome from the remote result and the cached user.
///
/// `cached` is consulted only when the remote call did not yield a profile
/// and `force_refresh` is off.
pub fn resolve_fetch(
    result: Result<ProfileResponse, ApiError>,
    force_refresh: bool,
    cached: impl FnOnce() -> Option<User>,
) -> FetchOutcome {
    let cause = match result.map(ProfileResponse::into_profile) {
        Ok(Some(profile)) => return FetchOutcome::Remote(profile),
        Ok(None) => "profile request was not successful".to_owned(),
        Err(e) => e.to_string(),
    };

    if force_refresh {
        return FetchOutcome::Failed(format!("{NO_PROFILE_MESSAGE}: {cause}"));
    }
    match cached() {
        Some(user) => {
            log::info!("profile fetch failed ({cause}); using cached user");
            FetchOutcome::Cached(Profile::from_cached_user(user))
        }
        None => FetchOutcome::Failed(format!("{NO_PROFILE_MESSAGE}: {cause}")),
    }
}

/// Counts one outstanding fetch for as long as it lives. Released on drop so
/// a cancelled fetch still clears `loading`.
struct InFlight {
    state: ArcRwSignal<ProfileState>,
}

impl InFlight {
    fn enter(state: ArcRwSignal<ProfileState>) -> Self {
        state.update(|s| {
            s.pending += 1;
            s.loading = true;
        });
        Self { state }
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.state.update(|s| {
            s.pending = s.pending.saturating_sub(1);
            s.loading = s.pending > 0;
        });
    }
}

#[derive(Clone)]
pub struct ProfileCache {
    state: ArcRwSignal<ProfileState>,
    store: CredentialStore,
    api: Arc<dyn AuthApi>,
    latest: Arc<AtomicU64>,
}

impl ProfileCache {
    pub fn new(store: CredentialStore, api: Arc<dyn AuthApi>) -> Self {
        Self { state: ArcRwSignal::new(ProfileState::default()), store, api, latest: Arc::new(AtomicU64::new(0)) }
    }

    pub fn state(&self) -> ArcRwSignal<ProfileState> {
        self.state.clone()
    }

    pub fn snapshot(&self) -> ProfileState {
        self.state.get_untracked()
    }

    /// Fetch the profile, remote first.
    ///
    /// Returns this call's own result even when a newer fetch has since
    /// started; in that case the shared state is left to the newer fetch.
    pub async fn fetch(&self, force_refresh: bool) -> Option<Profile> {
        let seq = self.latest.fetch_add(1, Ordering::Relaxed) + 1;
        let in_flight = InFlight::enter(self.state.clone());

        let token = self.store.get_stored_token();
        let result = self.api.get_profile(token).await;
        let outcome = resolve_fetch(result, force_refresh, || self.store.get_stored_user());

        let current = seq == self.latest.load(Ordering::Relaxed);
        if current {
            if let FetchOutcome::Remote(profile) = &outcome {
                self.store.set_stored_user(&User::from(profile));
            }
            self.state.update(|s| match &outcome {
                FetchOutcome::Remote(profile) | FetchOutcome::Cached(profile) => {
                    s.profile = Some(profile.clone());
                    s.error = None;
                }
                FetchOutcome::Failed(message) => s.error = Some(message.clone()),
            });
        } else {
            log::debug!("profile fetch #{seq} superseded; result not applied");
        }
        drop(in_flight);

        outcome.into_profile()
    }

    pub async fn refresh(&self) -> Option<Profile> {
        self.fetch(false).await
    }
}

impl std::fmt::Debug for ProfileCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfileCache")
            .field("state", &self.snapshot())
            .finish_non_exhaustive()
    }
}

pub fn provide_profile_cache(cache: ProfileCache) {
    provide_context(cache);
}

/// The cache mounted by the nearest `ProfileProvider`.
///
/// # Panics
///
/// Panics outside a `ProfileProvider`.
pub fn use_profile_cache() -> ProfileCache {
    expect_context::<ProfileCache>()
}
