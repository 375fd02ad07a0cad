use leptos::prelude::*;

use super::about::AboutPage;
use super::auth_stub::{LoginPage, RegisterPage};
use super::browse::BrowsePage;
use super::contact::ContactPage;
use super::dashboard::DashboardPage;
use super::faq::FaqPage;
use super::home::HomePage;
use super::not_found::NotFoundPage;
use super::report::ReportPage;
use super::safe_listings::SafeListingsPage;
use super::saved_listings::SavedListingsPage;
use crate::data::listings::mock_listings;
use crate::state::saved::SavedListings;
use crate::state::toast::ToastState;

/// Run `f` under a fresh owner carrying the contexts `App` provides.
fn with_app_contexts(saved: SavedListings, f: impl FnOnce()) {
    let owner = Owner::new();
    owner.with(|| {
        provide_context(RwSignal::new(saved));
        provide_context(RwSignal::new(ToastState::default()));
        f();
    });
    owner.cleanup();
}

// =============================================================================
// INTERACTIVE PAGES
// =============================================================================

#[test]
fn report_page_builds() {
    with_app_contexts(SavedListings::default(), || {
        let _view = ReportPage();
    });
}

#[test]
fn browse_page_builds() {
    with_app_contexts(SavedListings::default(), || {
        let _view = BrowsePage();
    });
}

#[test]
fn contact_page_builds() {
    with_app_contexts(SavedListings::default(), || {
        let _view = ContactPage();
    });
}

#[test]
fn faq_page_builds() {
    with_app_contexts(SavedListings::default(), || {
        let _view = FaqPage();
    });
}

#[test]
fn saved_page_builds_with_and_without_items() {
    with_app_contexts(SavedListings::default(), || {
        let _view = SavedListingsPage();
    });
    with_app_contexts(SavedListings::from_items(mock_listings()), || {
        let _view = SavedListingsPage();
    });
}

// =============================================================================
// STATIC PAGES
// =============================================================================

#[test]
fn static_pages_build() {
    with_app_contexts(SavedListings::default(), || {
        let _home = HomePage();
        let _dashboard = DashboardPage();
        let _about = AboutPage();
        let _safe = SafeListingsPage();
        let _login = LoginPage();
        let _register = RegisterPage();
        let _missing = NotFoundPage();
    });
}
