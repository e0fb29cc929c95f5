//! Mounts a [`ProfileCache`] for the dashboard subtree.

use leptos::prelude::*;

use crate::state::profile::{ProfileCache, provide_profile_cache};
use crate::state::session::use_session;

/// Provides a fresh profile cache and issues one fetch on mount.
#[component]
pub fn ProfileProvider(children: Children) -> impl IntoView {
    let session = use_session();
    let cache = ProfileCache::new(session.store().clone(), session.api());
    provide_profile_cache(cache.clone());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        cache.refresh().await;
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = cache;

    children()
}
