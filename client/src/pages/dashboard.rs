//! Authenticated dashboard shell with a section sidebar.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every dashboard route goes through `RequireAuth` and mounts a
//! `ProfileProvider`, so sections can read the profile cache. Sections other
//! than settings are content placeholders for the agency's tools.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::components::profile_provider::ProfileProvider;
use crate::components::route_guard::RequireAuth;
use crate::components::settings_panel::SettingsPanel;
use crate::state::session::use_session;
use crate::util::auth::DASHBOARD_ROUTE;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DashboardSection {
    #[default]
    Overview,
    Articles,
    Careers,
    Crm,
    Newsletter,
    Settings,
}

impl DashboardSection {
    pub const ALL: [Self; 6] =
        [Self::Overview, Self::Articles, Self::Careers, Self::Crm, Self::Newsletter, Self::Settings];

    /// Parse the `:section` route parameter. Missing means overview.
    pub fn from_param(param: Option<&str>) -> Option<Self> {
        match param.map(str::trim).unwrap_or("") {
            "" | "overview" => Some(Self::Overview),
            "articles" => Some(Self::Articles),
            "careers" => Some(Self::Careers),
            "crm" => Some(Self::Crm),
            "newsletter" => Some(Self::Newsletter),
            "settings" => Some(Self::Settings),
            _ => None,
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Articles => "articles",
            Self::Careers => "careers",
            Self::Crm => "crm",
            Self::Newsletter => "newsletter",
            Self::Settings => "settings",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Articles => "Articles",
            Self::Careers => "Careers",
            Self::Crm => "CRM",
            Self::Newsletter => "Newsletter",
            Self::Settings => "Settings",
        }
    }

    pub fn href(self) -> String {
        match self {
            Self::Overview => DASHBOARD_ROUTE.to_owned(),
            other => format!("{DASHBOARD_ROUTE}/{}", other.slug()),
        }
    }

    fn blurb(self) -> &'static str {
        match self {
            Self::Overview => "Your workspace at a glance.",
            Self::Articles => "Draft, schedule, and publish articles for the blog.",
            Self::Careers => "Manage open positions and incoming applications.",
            Self::Crm => "Track clients, contacts, and deal stages.",
            Self::Newsletter => "Build audiences and send newsletter campaigns.",
            Self::Settings => "Manage your account.",
        }
    }
}

/// Dashboard route. Redirects to `/login` if the user is not authenticated.
#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <RequireAuth>
            <ProfileProvider>
                <DashboardShell/>
            </ProfileProvider>
        </RequireAuth>
    }
}

#[component]
fn DashboardShell() -> impl IntoView {
    let session = use_session();
    let params = use_params_map();
    let section = move || DashboardSection::from_param(params.read().get("section").as_deref());

    let user_name = {
        let session = session.clone();
        move || session.user().map_or_else(|| "—".to_owned(), |u| u.display_name())
    };
    let initials = {
        let session = session.clone();
        move || session.user().map(|u| u.initials()).unwrap_or_default()
    };
    let on_logout = move |_| session.logout();

    view! {
        <div class="dashboard-page">
            <aside class="dashboard-page__sidebar">
                <A href="/" attr:class="dashboard-page__brand">"Northlight"</A>
                <ul class="dashboard-page__nav">
                    {DashboardSection::ALL
                        .into_iter()
                        .map(|item| {
                            view! {
                                <li class=("dashboard-page__nav-item--active", move || section() == Some(item))>
                                    <A href=item.href()>{item.label()}</A>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </aside>

            <div class="dashboard-page__main">
                <header class="dashboard-page__header">
                    <span class="avatar">{initials}</span>
                    <span class="dashboard-page__user">{user_name}</span>
                    <button class="btn" on:click=on_logout>"Log out"</button>
                </header>

                <main class="dashboard-page__content">
                    {move || match section() {
                        Some(DashboardSection::Settings) => view! { <SettingsPanel/> }.into_any(),
                        Some(other) => view! { <SectionPlaceholder section=other/> }.into_any(),
                        None => view! { <p class="dashboard-page__missing">"Section not found."</p> }.into_any(),
                    }}
                </main>
            </div>
        </div>
    }
}

#[component]
fn SectionPlaceholder(section: DashboardSection) -> impl IntoView {
    view! {
        <section class="dashboard-section">
            <h1>{section.label()}</h1>
            <p>{section.blurb()}</p>
        </section>
    }
}
