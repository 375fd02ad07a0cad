//! Modal with the full details of one listing.

use leptos::prelude::*;

use crate::components::listing_card::toggle_saved;
use crate::components::risk_badge::RiskBadge;
use crate::data::listings::Listing;
use crate::state::saved::SavedListings;
use crate::state::toast::ToastState;
use crate::util::format::{monthly_price, rating};

#[component]
pub fn ListingDetailsDialog(listing: Listing, on_close: Callback<()>, on_contact: Callback<Listing>) -> impl IntoView {
    let saved = expect_context::<RwSignal<SavedListings>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let id = listing.id.clone();
    let is_saved = Memo::new(move |_| saved.with(|s| s.contains(&id)));

    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    });

    let amenities = listing
        .amenities
        .iter()
        .map(|a| view! { <span class="badge badge--outline">{a.clone()}</span> })
        .collect_view();

    let contact_listing = listing.clone();
    let save_listing = listing.clone();

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div
                class="dialog dialog--wide"
                role="dialog"
                aria-modal="true"
                tabindex="0"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev| on_keydown.run(ev)
            >
                <div class="dialog__header">
                    <h2 class="dialog__title">{listing.title.clone()}</h2>
                    <RiskBadge report_count=listing.report_count/>
                    <button class="dialog__close" title="Close" on:click=move |_| on_close.run(())>
                        "✕"
                    </button>
                </div>
                <p class="dialog__subtitle">"📍 " {listing.location.clone()}</p>

                <div class="details-grid">
                    <div class="details-grid__cell">
                        <span class="details-grid__label">"Price"</span>
                        <p class="details-grid__value">{monthly_price(listing.price)}</p>
                    </div>
                    <div class="details-grid__cell">
                        <span class="details-grid__label">"Host Rating"</span>
                        <p class="details-grid__value">{format!("{}/5.0", rating(listing.host_rating))}</p>
                    </div>
                </div>

                <section class="dialog__section">
                    <h4>"Description"</h4>
                    <p class="muted">{listing.description.clone()}</p>
                </section>

                <section class="dialog__section">
                    <h4>"Host Information"</h4>
                    <p class="details-host">
                        "👤 " {listing.host_name.clone()}
                        {listing
                            .verified_host
                            .then(|| view! { <span class="badge badge--success">"Verified"</span> })}
                    </p>
                </section>

                <section class="dialog__section">
                    <h4>"Amenities"</h4>
                    <div class="details-amenities">{amenities}</div>
                </section>

                <section class="dialog__section">
                    <h4>"Availability"</h4>
                    <p class="muted">{listing.availability.clone()}</p>
                </section>

                <div class="dialog__actions">
                    <button
                        class="btn btn--primary btn--grow"
                        on:click=move |_| on_contact.run(contact_listing.clone())
                    >
                        "Contact Host"
                    </button>
                    <button
                        class="btn btn--outline btn--grow"
                        on:click=move |_| toggle_saved(saved, toasts, &save_listing)
                    >
                        {move || if is_saved.get() { "Remove from Saved" } else { "Save Listing" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
