//! Sign-in and registration placeholders.
//!
//! Accounts are not implemented. Both routes exist so the navbar buttons
//! land somewhere meaningful.

use leptos::prelude::*;

#[component]
fn AuthPlaceholder(title: &'static str, blurb: &'static str) -> impl IntoView {
    view! {
        <section class="auth-stub card">
            <h1>{title}</h1>
            <p class="muted">{blurb}</p>
            <div class="auth-stub__actions">
                <a class="btn btn--primary" href="/browse">"Browse Listings"</a>
                <a class="btn btn--outline" href="/">"Back to Home"</a>
            </div>
        </section>
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <AuthPlaceholder
            title="Sign In"
            blurb="Account sign-in is coming soon. You can browse listings and file reports without an account."
        />
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    view! {
        <AuthPlaceholder
            title="Create an Account"
            blurb="Registration is coming soon. Saved listings are kept in this browser in the meantime."
        />
    }
}
