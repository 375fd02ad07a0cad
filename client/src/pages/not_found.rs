//! Fallback for unknown routes.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="not-found">
            <h1 class="not-found__code">"404"</h1>
            <p class="muted">"Oops! Page not found"</p>
            <a class="btn btn--primary" href="/">"Return to Home"</a>
        </section>
    }
}
