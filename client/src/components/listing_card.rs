//! Card summarizing one listing in the browse and saved grids.
//!
//! DESIGN
//! ======
//! The same card serves both grids. In the browse grid the corner action
//! toggles saved status; in the saved grid it removes the listing and a
//! contact shortcut is added next to the details button.

use leptos::prelude::*;

use crate::components::risk_badge::RiskBadge;
use crate::components::toast_stack::show_toast;
use crate::data::listings::Listing;
use crate::state::saved::{SaveToggle, SavedListings};
use crate::state::toast::{ToastState, ToastVariant};
use crate::util::format::{rating, thousands};

/// Toggle `listing` in the saved collection and announce the result.
pub fn toggle_saved(saved: RwSignal<SavedListings>, toasts: RwSignal<ToastState>, listing: &Listing) {
    let mut outcome = None;
    saved.update(|s| outcome = Some(s.toggle(listing)));
    if let Some(outcome) = outcome {
        let (title, description) = outcome.toast_copy();
        show_toast(toasts, title, description, ToastVariant::Default);
    }
}

#[component]
pub fn ListingCard(
    listing: Listing,
    on_details: Callback<Listing>,
    #[prop(optional)] on_contact: Option<Callback<Listing>>,
    /// Render the saved-grid variant with a remove action.
    #[prop(optional)]
    saved_view: bool,
) -> impl IntoView {
    let saved = expect_context::<RwSignal<SavedListings>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let id = listing.id.clone();
    let is_saved = Memo::new(move |_| saved.with(|s| s.contains(&id)));

    let (shown, hidden) = listing.amenity_preview();
    let amenity_badges = shown
        .iter()
        .map(|a| view! { <span class="badge badge--secondary">{a.clone()}</span> })
        .collect_view();

    let corner_action = {
        let listing = listing.clone();
        if saved_view {
            let id = listing.id.clone();
            view! {
                <button
                    class="btn btn--ghost btn--icon"
                    title="Remove from saved"
                    on:click=move |_| {
                        let mut removed = false;
                        saved.update(|s| removed = s.remove(&id));
                        if removed {
                            let (title, description) = SaveToggle::Removed.toast_copy();
                            show_toast(toasts, title, description, ToastVariant::Default);
                        }
                    }
                >
                    "🗑"
                </button>
            }
            .into_any()
        } else {
            view! {
                <button
                    class="btn btn--ghost btn--icon listing-card__heart"
                    class:listing-card__heart--saved=move || is_saved.get()
                    title=move || if is_saved.get() { "Remove from saved" } else { "Save listing" }
                    on:click=move |_| toggle_saved(saved, toasts, &listing)
                >
                    {move || if is_saved.get() { "♥" } else { "♡" }}
                </button>
            }
            .into_any()
        }
    };

    let details_listing = listing.clone();
    let contact_listing = listing.clone();

    view! {
        <article class="card listing-card">
            <header class="listing-card__header">
                <div class="listing-card__badges">
                    <span class="badge badge--outline">{listing.property_type.label()}</span>
                    <div class="listing-card__actions">
                        <RiskBadge report_count=listing.report_count/>
                        {corner_action}
                    </div>
                </div>
                <h3 class="listing-card__title">{listing.title.clone()}</h3>
                <p class="listing-card__location">"📍 " {listing.location.clone()}</p>
            </header>

            <div class="listing-card__body">
                <div class="listing-card__price-row">
                    <span class="listing-card__price">
                        {format!("${}", thousands(listing.price))}
                        <span class="listing-card__per">"/month"</span>
                    </span>
                    <span class="listing-card__rating">"★ " {rating(listing.host_rating)}</span>
                </div>
                <p class="listing-card__availability">"📅 " {listing.availability.clone()}</p>
                <div class="listing-card__amenities">
                    {amenity_badges}
                    <Show when=move || { hidden > 0 }>
                        <span class="badge badge--secondary">{format!("+{hidden} more")}</span>
                    </Show>
                </div>
                <div class="listing-card__footer">
                    {on_contact
                        .map(|cb| {
                            view! {
                                <button
                                    class="btn btn--outline btn--sm"
                                    on:click=move |_| cb.run(contact_listing.clone())
                                >
                                    "✉ Contact"
                                </button>
                            }
                        })}
                    <button
                        class="btn btn--primary listing-card__details"
                        class:btn--sm=saved_view
                        on:click=move |_| on_details.run(details_listing.clone())
                    >
                        "View Details"
                    </button>
                </div>
            </div>
        </article>
    }
}
