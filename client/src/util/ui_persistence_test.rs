#![cfg(not(feature = "hydrate"))]

use super::*;
use crate::data::listings::mock_listings;

#[test]
fn load_json_is_none_without_browser_storage() {
    assert_eq!(load_json::<Vec<String>>("anything"), None);
}

#[test]
fn load_saved_listings_defaults_to_empty() {
    assert!(load_saved_listings().is_empty());
}

#[test]
fn store_saved_listings_is_noop_but_callable() {
    store_saved_listings(&SavedListings::from_items(mock_listings()));
    save_json(SAVED_LISTINGS_KEY, &Vec::<Listing>::new());
}
