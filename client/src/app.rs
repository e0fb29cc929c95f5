//! Root application component with routing and the session context.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::ClientConfig;
use crate::net::api::HttpAuthApi;
use crate::pages::{dashboard::DashboardPage, home::HomePage, login::LoginPage};
use crate::state::credentials::CredentialStore;
use crate::state::session::{SessionController, provide_session};
use crate::util::storage::BrowserStorage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Session wired to browser storage and the HTTP auth API.
pub fn browser_session(config: ClientConfig) -> SessionController {
    let store = CredentialStore::new(Arc::new(BrowserStorage));
    SessionController::new(store, Arc::new(HttpAuthApi::new(config)))
}

/// Root application component.
///
/// Builds the session controller, provides it to the tree, and hydrates it
/// from storage once the app is mounted in the browser.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = browser_session(ClientConfig::from_build_env());
    provide_session(session.clone());

    // Effects only run client-side, so SSR always renders the hydrating state.
    Effect::new(move || session.hydrate());

    view! {
        <Stylesheet id="leptos" href="/pkg/agency-site.css"/>
        <Title text="Northlight Media"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=(StaticSegment("dashboard"), ParamSegment("section")) view=DashboardPage/>
            </Routes>
        </Router>
    }
}
