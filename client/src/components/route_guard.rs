//! Wrapper that keeps protected views behind an authenticated session.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::session::use_session;
use crate::util::auth::{GuardOutcome, guard_outcome, install_unauth_redirect};

/// Renders `children` only for an authenticated session.
///
/// While the session is still hydrating only a neutral loading indicator is
/// shown. An anonymous session is sent to `/login` and renders nothing.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    install_unauth_redirect(session.clone(), use_navigate());

    let state = session.state();
    let outcome = Memo::new(move |_| guard_outcome(state.with(|s| s.phase())));

    move || match outcome.get() {
        GuardOutcome::Loading => view! {
            <div class="route-guard__loading" role="status" aria-live="polite">
                <span class="spinner"></span>
            </div>
        }
        .into_any(),
        GuardOutcome::Redirect => ().into_any(),
        GuardOutcome::Render => children().into_any(),
    }
}
