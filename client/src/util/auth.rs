//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes apply identical unauthenticated redirect behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::{SessionController, SessionPhase};

pub const LOGIN_ROUTE: &str = "/login";
pub const DASHBOARD_ROUTE: &str = "/dashboard";

/// What a guarded route shows for a session phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    Loading,
    Redirect,
    Render,
}

pub fn guard_outcome(phase: SessionPhase) -> GuardOutcome {
    match phase {
        SessionPhase::Hydrating => GuardOutcome::Loading,
        SessionPhase::Anonymous => GuardOutcome::Redirect,
        SessionPhase::Authenticated => GuardOutcome::Render,
    }
}

pub fn should_redirect_unauth(phase: SessionPhase) -> bool {
    guard_outcome(phase) == GuardOutcome::Redirect
}

/// Redirect to `/login` whenever the session has settled without a user.
pub fn install_unauth_redirect<F>(session: SessionController, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(session.phase()) {
            navigate(LOGIN_ROUTE, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
