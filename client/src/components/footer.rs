//! Site footer with platform and company links.

use leptos::prelude::*;

use crate::data::site::{FOOTER_COMPANY_LINKS, FOOTER_PLATFORM_LINKS, NavItem};
use crate::util::format::current_year;

fn link_list(items: &'static [NavItem]) -> impl IntoView {
    view! {
        <ul class="footer__links">
            {items
                .iter()
                .map(|item| view! { <li><a href=item.href>{item.name}</a></li> })
                .collect_view()}
        </ul>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = current_year();

    view! {
        <footer class="footer">
            <div class="footer__grid">
                <div class="footer__mission">
                    <div class="footer__brand">
                        <span class="navbar__logo" aria-hidden="true">"⛨"</span>
                        <span class="navbar__title">"DRAMP"</span>
                    </div>
                    <p>
                        "Fighting housing discrimination through transparency, community reporting, "
                        "and data-driven advocacy. Every voice matters in creating fair housing for all."
                    </p>
                </div>
                <div>
                    <h3 class="footer__heading">"Platform"</h3>
                    {link_list(FOOTER_PLATFORM_LINKS)}
                </div>
                <div>
                    <h3 class="footer__heading">"Company"</h3>
                    {link_list(FOOTER_COMPANY_LINKS)}
                </div>
            </div>
            <div class="footer__bottom">
                <p>{format!("© {year} DRAMP. Fighting for fair housing rights.")}</p>
            </div>
        </footer>
    }
}
