//! # client
//!
//! Leptos + WASM frontend for the Northlight Media site: public marketing
//! pages plus an authenticated dashboard shell.
//!
//! This crate contains pages, components, the session core (credential
//! store, session controller, profile cache), and the REST client for the
//! remote authentication API.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already installed");
    }
    leptos::mount::hydrate_body(app::App);
}
