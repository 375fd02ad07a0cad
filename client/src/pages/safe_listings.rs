//! How listings are verified, with per-city safety figures.

use leptos::prelude::*;

use crate::data::site::{ITALIAN_CITIES, SAFETY_STATS, VERIFICATION_FEATURES};
use crate::util::format::thousands;

#[component]
pub fn SafeListingsPage() -> impl IntoView {
    let stats = SAFETY_STATS
        .iter()
        .map(|stat| {
            view! {
                <div class="stat">
                    <span class="stat__value">{stat.value}</span>
                    <span class="stat__label">{stat.label}</span>
                </div>
            }
        })
        .collect_view();

    let features = VERIFICATION_FEATURES
        .iter()
        .map(|feature| {
            view! {
                <article class="card feature-card">
                    <h3 class="feature-card__title">"✓ " {feature.title}</h3>
                    <p class="muted">{feature.description}</p>
                </article>
            }
        })
        .collect_view();

    let cities = ITALIAN_CITIES
        .iter()
        .map(|city| {
            view! {
                <article class="card city">
                    <h3>{city.name}</h3>
                    <p class="muted">{format!("{} verified listings", thousands(city.listings))}</p>
                    <span class="badge badge--success">{format!("{:.1}% safety score", city.safety_score)}</span>
                </article>
            }
        })
        .collect_view();

    view! {
        <div class="safe-listings">
            <section class="hero hero--compact">
                <span class="badge badge--success">"🛡 Verified Safe"</span>
                <h1 class="hero__title">"Safe Listings Across Italy"</h1>
                <p class="hero__lead">
                    "Every listing on DRAMP passes host screening and continuous community monitoring."
                </p>
            </section>

            <section class="stat-grid">{stats}</section>

            <section class="section">
                <h2 class="section__title">"Our Verification Process"</h2>
                <div class="feature-grid">{features}</div>
            </section>

            <section class="section">
                <h2 class="section__title">"Safe Listings by City"</h2>
                <div class="city-grid">{cities}</div>
            </section>

            <section class="cta card">
                <h2>"Ready to find a safe home?"</h2>
                <a class="btn btn--primary btn--lg" href="/browse">"Browse Verified Listings"</a>
            </section>
        </div>
    }
}
