//! Organization overview.

use leptos::prelude::*;

use crate::data::site::{ABOUT_PLATFORM_FEATURES, ABOUT_STATS, ABOUT_VALUES};

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="about">
            <section class="hero hero--compact">
                <h1 class="hero__title">"About DRAMP"</h1>
                <p class="hero__lead">
                    "We are building a housing market where nobody is turned away because of who they are. "
                    "DRAMP verifies hosts, records discrimination and publishes what we learn."
                </p>
            </section>

            <section class="stat-grid">
                {ABOUT_STATS
                    .iter()
                    .map(|stat| {
                        view! {
                            <div class="stat">
                                <span class="stat__value">{stat.value}</span>
                                <span class="stat__label">{stat.label}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>

            <section class="section">
                <h2 class="section__title">"Our Values"</h2>
                <div class="feature-grid">
                    {ABOUT_VALUES
                        .iter()
                        .map(|value| {
                            view! {
                                <article class="card feature-card">
                                    <h3 class="feature-card__title">{value.title}</h3>
                                    <p class="muted">{value.description}</p>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="section card">
                <h2 class="section__title">"What Makes Us Different"</h2>
                <ul class="check-list">
                    {ABOUT_PLATFORM_FEATURES.iter().map(|f| view! { <li>"✓ " {*f}</li> }).collect_view()}
                </ul>
            </section>

            <section class="cta card">
                <h2>"Join the movement for fair housing"</h2>
                <div class="hero__actions">
                    <a class="btn btn--primary" href="/browse">"Browse Safe Listings"</a>
                    <a class="btn btn--outline" href="/contact">"Get in Touch"</a>
                </div>
            </section>
        </div>
    }
}
