//! Account settings: profile details, manual refresh, and name editing.

#[cfg(test)]
#[path = "settings_panel_test.rs"]
mod settings_panel_test;

use leptos::prelude::*;

use crate::net::types::{Profile, UserPatch};
use crate::state::profile::use_profile_cache;
use crate::state::session::use_session;

/// Build a name patch from form input. Blank fields are left unchanged;
/// `None` when nothing would change.
pub(crate) fn name_patch(first_name: &str, last_name: &str) -> Option<UserPatch> {
    let non_blank = |v: &str| Some(v.trim().to_owned()).filter(|v| !v.is_empty());
    let patch = UserPatch { first_name: non_blank(first_name), last_name: non_blank(last_name), ..UserPatch::default() };
    (!patch.is_empty()).then_some(patch)
}

fn or_dash(value: Option<&str>) -> String {
    value.filter(|v| !v.is_empty()).unwrap_or("—").to_owned()
}

/// Rows shown in the profile card, in display order.
pub(crate) fn profile_rows(profile: &Profile) -> Vec<(&'static str, String)> {
    let location = profile.address.as_ref().map(|a| {
        [a.city.as_deref(), a.state.as_deref(), a.country.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(", ")
    });
    vec![
        ("Name", format!("{} {}", profile.first_name, profile.last_name).trim().to_owned()),
        ("Email", profile.email.clone()),
        ("Phone", or_dash(profile.phone.as_deref())),
        ("Role", profile.role.clone()),
        ("Status", profile.status.label().to_owned()),
        ("Location", or_dash(location.as_deref())),
    ]
}

#[component]
pub fn SettingsPanel() -> impl IntoView {
    let session = use_session();
    let cache = use_profile_cache();
    let profile_state = cache.state();

    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let saved = RwSignal::new(false);

    let loading = {
        let profile_state = profile_state.clone();
        move || profile_state.with(|s| s.loading)
    };
    let error = {
        let profile_state = profile_state.clone();
        move || profile_state.with(|s| s.error.clone())
    };
    let refresh_disabled = loading.clone();
    let rows = move || profile_state.with(|s| s.profile.as_ref().map(profile_rows));

    let on_refresh = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let cache = cache.clone();
            leptos::task::spawn_local(async move {
                cache.refresh().await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = &cache;
    };

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(patch) = name_patch(&first_name.get(), &last_name.get()) {
            session.update_user(patch);
            first_name.set(String::new());
            last_name.set(String::new());
            saved.set(true);
        }
    };

    view! {
        <section class="settings-panel">
            <header class="settings-panel__header">
                <h2>"Account Settings"</h2>
                <button class="btn" on:click=on_refresh disabled=refresh_disabled>
                    {move || if loading() { "Refreshing…" } else { "Refresh" }}
                </button>
            </header>

            {move || error().map(|message| view! { <p class="settings-panel__error">{message}</p> })}

            <div class="settings-panel__card">
                {move || match rows() {
                    Some(rows) => rows
                        .into_iter()
                        .map(|(label, value)| {
                            view! {
                                <div class="settings-panel__row">
                                    <span class="settings-panel__label">{label}</span>
                                    <span class="settings-panel__value">{value}</span>
                                </div>
                            }
                        })
                        .collect_view()
                        .into_any(),
                    None => view! { <p class="settings-panel__empty">"No profile loaded yet."</p> }.into_any(),
                }}
            </div>

            <form class="settings-panel__form" on:submit=on_save>
                <h3>"Update name"</h3>
                <input
                    class="settings-panel__input"
                    type="text"
                    placeholder="First name"
                    prop:value=move || first_name.get()
                    on:input=move |ev| {
                        saved.set(false);
                        first_name.set(event_target_value(&ev));
                    }
                />
                <input
                    class="settings-panel__input"
                    type="text"
                    placeholder="Last name"
                    prop:value=move || last_name.get()
                    on:input=move |ev| {
                        saved.set(false);
                        last_name.set(event_target_value(&ev));
                    }
                />
                <button class="btn btn--primary" type="submit">"Save"</button>
                <Show when=move || saved.get()>
                    <p class="settings-panel__saved">"Saved."</p>
                </Show>
            </form>
        </section>
    }
}
