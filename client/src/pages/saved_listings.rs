//! Listings the user saved in this browser.

use leptos::prelude::*;

use crate::components::contact_host_modal::ContactHostModal;
use crate::components::listing_card::ListingCard;
use crate::components::listing_details_dialog::ListingDetailsDialog;
use crate::data::listings::Listing;
use crate::state::saved::SavedListings;
use crate::util::format::plural;

#[component]
pub fn SavedListingsPage() -> impl IntoView {
    let saved = expect_context::<RwSignal<SavedListings>>();
    let details = RwSignal::new(None::<Listing>);
    let contact = RwSignal::new(None::<Listing>);

    let on_details = Callback::new(move |listing: Listing| details.set(Some(listing)));
    let on_contact = Callback::new(move |listing: Listing| {
        details.set(None);
        contact.set(Some(listing));
    });

    view! {
        <div class="saved">
            <header class="page-header">
                <h1>"♥ Saved Listings"</h1>
                <p class="muted">
                    {move || saved.with(|s| format!("You have {} saved", plural(s.len(), "listing")))}
                </p>
            </header>

            <Show
                when=move || saved.with(|s| !s.is_empty())
                fallback=|| {
                    view! {
                        <div class="card empty-state">
                            <h3>"No saved listings yet"</h3>
                            <p class="muted">"Tap the heart on any listing to keep it here for later."</p>
                            <a class="btn btn--primary" href="/browse">"Browse Listings"</a>
                        </div>
                    }
                }
            >
                <div class="listing-grid">
                    {move || {
                        saved
                            .get()
                            .items()
                            .iter()
                            .cloned()
                            .map(|listing| {
                                view! {
                                    <ListingCard
                                        listing=listing
                                        on_details=on_details
                                        on_contact=on_contact
                                        saved_view=true
                                    />
                                }
                            })
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
