//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site and dashboard chrome while reading shared session
//! and profile state from Leptos context providers.

pub mod profile_provider;
pub mod route_guard;
pub mod settings_panel;
pub mod site_nav;
