//! Top navigation bar with active-route highlighting and the saved badge.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::data::site::NAVIGATION;
use crate::state::saved::SavedListings;

#[component]
pub fn Navbar() -> impl IntoView {
    let saved = expect_context::<RwSignal<SavedListings>>();
    let location = use_location();
    let menu_open = RwSignal::new(false);

    let pathname = location.pathname;
    let saved_count = move || saved.with(SavedListings::len);
    let close_menu = move |_| menu_open.set(false);

    let links = move |mobile: bool| {
        NAVIGATION
            .iter()
            .map(|item| {
                let href = item.href;
                view! {
                    <a
                        class="navbar__link"
                        class:navbar__link--active=move || pathname.get() == href
                        class:navbar__link--mobile=mobile
                        href=href
                        on:click=close_menu
                    >
                        {item.name}
                    </a>
                }
            })
            .collect::<Vec<_>>()
    };

    let saved_link = move |mobile: bool| {
        view! {
            <a
                class="navbar__link navbar__link--saved"
                class:navbar__link--active=move || pathname.get() == "/saved"
                class:navbar__link--mobile=mobile
                href="/saved"
                on:click=close_menu
            >
                {if mobile { "Saved Listings" } else { "Saved" }}
                <Show when=move || { saved_count() > 0 }>
                    <span class="badge badge--count">{saved_count}</span>
                </Show>
            </a>
        }
    };

    view! {
        <nav class="navbar">
            <div class="navbar__inner">
                <a class="navbar__brand" href="/">
                    <span class="navbar__logo" aria-hidden="true">"⛨"</span>
                    <span class="navbar__title">"DRAMP"</span>
                    <span class="navbar__tagline">"Fair Housing Platform"</span>
                </a>

                <div class="navbar__links">{links(false)} {saved_link(false)}</div>

                <div class="navbar__actions">
                    <a class="btn btn--outline btn--sm" href="/login">"Login"</a>
                    <a class="btn btn--primary btn--sm" href="/register">"Get Started"</a>
                </div>

                <button
                    class="btn btn--ghost navbar__toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>

            <Show when=move || menu_open.get()>
                <div class="navbar__mobile">
                    {links(true)}
                    {saved_link(true)}
                    <div class="navbar__mobile-actions">
                        <a class="btn btn--outline" href="/login" on:click=close_menu>"Login"</a>
                        <a class="btn btn--primary" href="/register" on:click=close_menu>"Get Started"</a>
                    </div>
                </div>
            </Show>
        </nav>
    }
}
