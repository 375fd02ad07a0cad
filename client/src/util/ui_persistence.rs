//! Browser localStorage helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! These helpers centralize hydrate-only read/write behavior so the saved
//! listings context can persist without repeating web-sys glue. Server
//! rendering and native tests see an empty storage and no-op writes.

#[cfg(test)]
#[path = "ui_persistence_test.rs"]
mod ui_persistence_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::data::listings::Listing;
use crate::state::saved::{SAVED_LISTINGS_KEY, SavedListings};

/// Load a JSON value from `localStorage` for `key`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item(key).ok().flatten()?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("ignoring malformed localStorage entry {key}: {e}");
                None
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Save a JSON value to `localStorage` for `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let Ok(raw) = serde_json::to_string(value) else {
            return;
        };
        if storage.set_item(key, &raw).is_err() {
            log::warn!("localStorage write failed for {key}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Read the persisted saved-listings collection. Missing or malformed
/// payloads yield an empty collection.
pub fn load_saved_listings() -> SavedListings {
    load_json::<Vec<Listing>>(SAVED_LISTINGS_KEY).map_or_else(SavedListings::default, SavedListings::from_items)
}

/// Rewrite the persisted saved-listings collection.
pub fn store_saved_listings(saved: &SavedListings) {
    save_json(SAVED_LISTINGS_KEY, saved);
}
