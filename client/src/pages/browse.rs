//! Listing search page.
//!
//! ARCHITECTURE
//! ============
//! Filter widgets write into one `RwSignal<BrowseFilters>`; the visible grid
//! is a `Memo` over the fixture set, so every keystroke recomputes the view
//! synchronously. The details dialog and the contact modal are page-scoped
//! overlays keyed off the selected listing.

use leptos::prelude::*;

use crate::components::contact_host_modal::ContactHostModal;
use crate::components::listing_card::ListingCard;
use crate::components::listing_details_dialog::ListingDetailsDialog;
use crate::data::listings::{Listing, PropertyType, mock_listings};
use crate::state::browse::{BrowseFilters, PriceRange, SortKey, TypeFilter, results_caption};

#[component]
pub fn BrowsePage() -> impl IntoView {
    let listings = StoredValue::new(mock_listings());
    let filters = RwSignal::new(BrowseFilters::default());
    let visible = Memo::new(move |_| filters.with(|f| listings.with_value(|all| f.apply(all))));

    let details = RwSignal::new(None::<Listing>);
    let contact = RwSignal::new(None::<Listing>);

    let on_details = Callback::new(move |listing: Listing| details.set(Some(listing)));
    let on_contact = Callback::new(move |listing: Listing| {
        details.set(None);
        contact.set(Some(listing));
    });

    view! {
        <div class="browse">
            <header class="page-header">
                <h1>"Browse Safe Listings"</h1>
                <p class="muted">"Verified rentals with transparent host ratings and report history."</p>
            </header>

            <section class="card filters">
                <input
                    class="input filters__search"
                    type="search"
                    placeholder="Search by title or location..."
                    prop:value=move || filters.with(|f| f.query.clone())
                    on:input=move |ev| filters.update(|f| f.query = event_target_value(&ev))
                />
                <select
                    class="input"
                    prop:value=move || filters.with(|f| f.price.as_str())
                    on:change=move |ev| filters.update(|f| f.price = PriceRange::parse(&event_target_value(&ev)))
                >
                    {PriceRange::ALL
                        .into_iter()
                        .map(|r| view! { <option value=r.as_str()>{r.label()}</option> })
                        .collect_view()}
                </select>
                <select
                    class="input"
                    prop:value=move || filters.with(|f| f.property_type.as_str())
                    on:change=move |ev| {
                        filters.update(|f| f.property_type = TypeFilter::parse(&event_target_value(&ev)));
                    }
                >
                    <option value=TypeFilter::ALL_VALUE>"All Types"</option>
                    {PropertyType::ALL
                        .into_iter()
                        .map(|t| view! { <option value=t.label()>{t.label()}</option> })
                        .collect_view()}
                </select>
                <select
                    class="input"
                    prop:value=move || filters.with(|f| f.sort.as_str())
                    on:change=move |ev| filters.update(|f| f.sort = SortKey::parse(&event_target_value(&ev)))
                >
                    {SortKey::ALL
                        .into_iter()
                        .map(|k| view! { <option value=k.as_str()>{k.label()}</option> })
                        .collect_view()}
                </select>
            </section>

            <p class="browse__count muted">{move || visible.with(|v| results_caption(v.len()))}</p>

            <Show
                when=move || visible.with(|v| !v.is_empty())
                fallback=|| {
                    view! {
                        <div class="card empty-state">
                            <h3>"No listings found"</h3>
                            <p class="muted">"Try adjusting your search or filters."</p>
                        </div>
                    }
                }
            >
                <div class="listing-grid">
                    {move || {
                        visible
                            .get()
                            .into_iter()
                            .map(|listing| view! { <ListingCard listing=listing on_details=on_details/> })
                            .collect_view()
                    }}
                </div>
            </Show>

            {move || {
                details
                    .get()
                    .map(|listing| {
                        view! {
                            <ListingDetailsDialog
                                listing=listing
                                on_close=Callback::new(move |()| details.set(None))
                                on_contact=on_contact
                            />
                        }
                    })
            }}

            {move || {
                contact
                    .get()
                    .map(|listing| {
                        view! {
                            <ContactHostModal
                                host_name=listing.host_name
                                listing_title=listing.title
                                on_close=Callback::new(move |()| contact.set(None))
                            />
                        }
                    })
            }}
        </div>
    }
}
