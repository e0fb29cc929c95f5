//! Top navigation for the public marketing pages.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::session::use_session;
use crate::util::auth::{DASHBOARD_ROUTE, LOGIN_ROUTE};

#[component]
pub fn SiteNav() -> impl IntoView {
    let session = use_session();
    let signed_in = move || session.is_authenticated();

    view! {
        <nav class="site-nav">
            <A href="/" attr:class="site-nav__brand">"Northlight Media"</A>
            <ul class="site-nav__links">
                <li><a href="/#about">"About"</a></li>
                <li><a href="/#services">"Services"</a></li>
                <li><a href="/#contact">"Contact"</a></li>
            </ul>
            {move || {
                if signed_in() {
                    view! { <A href=DASHBOARD_ROUTE attr:class="btn btn--primary">"Dashboard"</A> }.into_any()
                } else {
                    view! { <A href=LOGIN_ROUTE attr:class="btn">"Log in"</A> }.into_any()
                }
            }}
        </nav>
    }
}
