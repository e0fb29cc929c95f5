//! Public landing page: hero, about, services, and contact sections.

use leptos::prelude::*;

use crate::components::site_nav::SiteNav;

struct Service {
    title: &'static str,
    blurb: &'static str,
}

const SERVICES: &[Service] = &[
    Service { title: "Brand Strategy", blurb: "Positioning, messaging, and identity systems built to last." },
    Service { title: "Content Production", blurb: "Video, photography, and editorial for every channel." },
    Service { title: "Digital Campaigns", blurb: "Paid social, search, and email programs measured end to end." },
    Service { title: "Audience Growth", blurb: "Newsletters and communities that keep customers coming back." },
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <SiteNav/>

            <header class="hero">
                <h1>"Stories that move markets."</h1>
                <p class="hero__lede">
                    "We are a media and marketing agency helping ambitious brands find their voice."
                </p>
                <a class="btn btn--primary" href="/#contact">"Start a project"</a>
            </header>

            <section id="about" class="home-section">
                <h2>"About us"</h2>
                <p>
                    "A small senior team of strategists, writers, and producers. "
                    "We plan, make, and measure campaigns under one roof."
                </p>
            </section>

            <section id="services" class="home-section">
                <h2>"What we do"</h2>
                <div class="home-section__grid">
                    {SERVICES
                        .iter()
                        .map(|s| {
                            view! {
                                <article class="service-card">
                                    <h3>{s.title}</h3>
                                    <p>{s.blurb}</p>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section id="contact" class="home-section">
                <h2>"Contact"</h2>
                <p>"Tell us about your next launch."</p>
                <a class="btn" href="mailto:hello@northlight.media">"hello@northlight.media"</a>
            </section>

            <footer class="site-footer">"© Northlight Media"</footer>
        </div>
    }
}
