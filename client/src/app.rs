//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{footer::Footer, navbar::Navbar, toast_stack::ToastStack};
use crate::pages::{
    about::AboutPage,
    auth_stub::{LoginPage, RegisterPage},
    browse::BrowsePage,
    contact::ContactPage,
    dashboard::DashboardPage,
    faq::FaqPage,
    home::HomePage,
    not_found::NotFoundPage,
    report::ReportPage,
    safe_listings::SafeListingsPage,
    saved_listings::SavedListingsPage,
};
use crate::state::saved::{SavedListings, SavedSync, SyncAction};
use crate::state::toast::ToastState;
use crate::util::ui_persistence;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the saved-listings and toast contexts and sets up client-side
/// routing. Every page renders between the shared navbar and footer.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let saved = RwSignal::new(SavedListings::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(saved);
    provide_context(toasts);

    sync_saved_listings(saved);

    view! {
        <Stylesheet id="leptos" href="/pkg/dramp.css"/>
        <Title text="DRAMP - Fair Housing"/>

        <Router>
            <Navbar/>
            <main class="page">
                <Routes fallback=NotFoundPage>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("browse") view=BrowsePage/>
                    <Route path=StaticSegment("report") view=ReportPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("faq") view=FaqPage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route path=StaticSegment("contact") view=ContactPage/>
                    <Route path=StaticSegment("saved") view=SavedListingsPage/>
                    <Route path=StaticSegment("safe-listings") view=SafeListingsPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                </Routes>
            </main>
            <Footer/>
            <ToastStack/>
        </Router>
    }
}

/// Hydrate the saved collection from local storage once, then rewrite the
/// stored payload on every change.
///
/// Effects only run in the browser, after hydration, so the server-rendered
/// markup always starts from an empty collection.
fn sync_saved_listings(saved: RwSignal<SavedListings>) {
    let sync = StoredValue::new(SavedSync::default());
    Effect::new(move || {
        let current = saved.get();
        let mut action = SyncAction::Keep;
        sync.update_value(|s| action = s.on_change(&current, ui_persistence::load_saved_listings));
        match action {
            SyncAction::Hydrate(stored) => {
                #[cfg(feature = "hydrate")]
                log::debug!("hydrated {} saved listings", stored.len());
                saved.set(stored);
            }
            SyncAction::Store => ui_persistence::store_saved_listings(&current),
            SyncAction::Keep => {}
        }
    });
}
