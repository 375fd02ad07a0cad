//! Landing page.

use leptos::prelude::*;

use crate::data::site::{HOME_FEATURES, HOME_STATS};

#[component]
pub fn HomePage() -> impl IntoView {
    let stats = HOME_STATS
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

    let features = HOME_FEATURES
        .iter()
        .map(|feature| {
            view! {
                <article class="card feature-card">
                    <h3 class="feature-card__title">{feature.title}</h3>
                    <p class="muted">{feature.description}</p>
                    {feature.href.map(|href| view! { <a class="btn btn--outline" href=href>"Learn more →"</a> })}
                </article>
            }
        })
        .collect_view();

    view! {
        <div class="home">
            <section class="hero">
                <span class="badge badge--outline">"🛡 Fighting Housing Discrimination in Italy"</span>
                <h1 class="hero__title">"Fair Housing for Everyone"</h1>
                <p class="hero__lead">
                    "DRAMP helps international students and marginalized communities find safe, "
                    "discrimination-free housing. Report incidents, browse verified listings and "
                    "see where discrimination happens."
                </p>
                <div class="hero__actions">
                    <a class="btn btn--primary btn--lg" href="/report">"Report Discrimination"</a>
                    <a class="btn btn--outline btn--lg" href="/browse">"Browse Safe Listings"</a>
                </div>
            </section>

            <section class="stat-grid">{stats}</section>

            <section class="section">
                <h2 class="section__title">"How DRAMP Helps"</h2>
                <div class="feature-grid">{features}</div>
            </section>

            <section class="section mission">
                <h2 class="section__title">"Our Mission"</h2>
                <p class="section__lead">
                    "Everyone deserves a home free from prejudice. We document discrimination, "
                    "hold hosts accountable and give renters the information they need to choose safely."
                </p>
            </section>

            <section class="cta card">
                <h2>"Experienced housing discrimination?"</h2>
                <p class="muted">"Your report is confidential and helps protect the next renter."</p>
                <a class="btn btn--primary btn--lg" href="/report">"File a Report"</a>
            </section>
        </div>
    }
}
