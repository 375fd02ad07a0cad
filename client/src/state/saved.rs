//! Saved-listings collection backed by browser local storage.
//!
//! DESIGN
//! ======
//! The store is a plain value held in an `RwSignal` context. It serializes as
//! a bare JSON array so the persisted payload is exactly the list of saved
//! listings. Ids are unique: `add` performs a linear existence check first.
//!
//! TRADE-OFFS
//! ==========
//! The whole collection is rewritten on every change. The saved set is tiny
//! and user-curated, so incremental writes would buy nothing.

#[cfg(test)]
#[path = "saved_test.rs"]
mod saved_test;

use serde::{Deserialize, Serialize};

use crate::data::listings::Listing;

/// Local storage key holding the saved collection.
pub const SAVED_LISTINGS_KEY: &str = "savedListings";

/// Outcome of toggling a listing's saved status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveToggle {
    Added,
    Removed,
}

/// The user's saved listings, in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SavedListings {
    items: Vec<Listing>,
}

impl SavedListings {
    /// Build from a stored payload, dropping any duplicate ids after the first.
    pub fn from_items(items: Vec<Listing>) -> Self {
        let mut saved = Self::default();
        for listing in items {
            saved.add(listing);
        }
        saved
    }

    pub fn items(&self) -> &[Listing] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|l| l.id == id)
    }

    /// Append `listing` unless its id is already saved. Returns whether the
    /// collection changed.
    pub fn add(&mut self, listing: Listing) -> bool {
        if self.contains(&listing.id) {
            return false;
        }
        self.items.push(listing);
        true
    }

    /// Remove the listing with `id`. Absent ids are a no-op.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|l| l.id != id);
        self.items.len() != before
    }

    pub fn toggle(&mut self, listing: &Listing) -> SaveToggle {
        if self.remove(&listing.id) {
            SaveToggle::Removed
        } else {
            self.items.push(listing.clone());
            SaveToggle::Added
        }
    }

    /// Serialize to the local storage payload.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Parse a local storage payload, de-duplicating ids.
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        let items: Vec<Listing> = serde_json::from_str(raw)?;
        Ok(Self::from_items(items))
    }
}

impl SaveToggle {
    /// Toast title and description announcing the toggle.
    pub fn toast_copy(self) -> (&'static str, &'static str) {
        match self {
            Self::Added => ("Saved successfully", "Listing added to your saved listings."),
            Self::Removed => ("Removed from saved", "Listing removed from your saved listings."),
        }
    }
}

/// What the storage sync effect should do after the collection changed.
#[derive(Clone, Debug, PartialEq)]
pub enum SyncAction {
    /// First run: replace the in-memory collection with the stored one.
    Hydrate(SavedListings),
    /// First run and storage already matches; nothing to write.
    Keep,
    /// Rewrite storage with the current collection.
    Store,
}

/// Hydrate-once, write-after state for the saved-listings storage effect.
///
/// Storage is never written before the first load has happened, so an empty
/// pre-hydration collection cannot clobber what the user saved earlier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SavedSync {
    hydrated: bool,
}

impl SavedSync {
    pub fn is_hydrated(self) -> bool {
        self.hydrated
    }

    /// Decide the effect's action for `current`. `load` reads storage and is
    /// only called on the first run.
    pub fn on_change(&mut self, current: &SavedListings, load: impl FnOnce() -> SavedListings) -> SyncAction {
        if self.hydrated {
            return SyncAction::Store;
        }
        self.hydrated = true;
        let stored = load();
        if &stored == current { SyncAction::Keep } else { SyncAction::Hydrate(stored) }
    }
}
