//! Browse page filter state and the filter/sort pipeline.
//!
//! DESIGN
//! ======
//! Filtering is a pure function of `BrowseFilters` over a listing slice so the
//! page can recompute its view synchronously on every keystroke. Select
//! widgets bind to the `as_str`/`parse` string forms below.

#[cfg(test)]
#[path = "browse_test.rs"]
mod browse_test;

use std::cmp::Ordering;

use crate::data::listings::{Listing, PropertyType};

/// Monthly price buckets offered by the price filter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PriceRange {
    #[default]
    All,
    UpTo1000,
    From1000To1500,
    From1500To2000,
    Over2000,
}

impl PriceRange {
    pub const ALL: [PriceRange; 5] =
        [Self::All, Self::UpTo1000, Self::From1000To1500, Self::From1500To2000, Self::Over2000];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all-prices",
            Self::UpTo1000 => "0-1000",
            Self::From1000To1500 => "1000-1500",
            Self::From1500To2000 => "1500-2000",
            Self::Over2000 => "2000+",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Prices",
            Self::UpTo1000 => "$0 - $1,000",
            Self::From1000To1500 => "$1,000 - $1,500",
            Self::From1500To2000 => "$1,500 - $2,000",
            Self::Over2000 => "$2,000+",
        }
    }

    /// Parse a select value. Empty and unknown values mean no price filter.
    pub fn parse(raw: &str) -> Self {
        Self::ALL.into_iter().find(|r| r.as_str() == raw).unwrap_or_default()
    }

    pub fn matches(self, price: u32) -> bool {
        match self {
            Self::All => true,
            Self::UpTo1000 => price <= 1000,
            Self::From1000To1500 => price > 1000 && price <= 1500,
            Self::From1500To2000 => price > 1500 && price <= 2000,
            Self::Over2000 => price > 2000,
        }
    }
}

/// Property type filter: everything, or one exact type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TypeFilter {
    #[default]
    All,
    Only(PropertyType),
}

impl TypeFilter {
    pub const ALL_VALUE: &'static str = "all-types";

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => Self::ALL_VALUE,
            Self::Only(kind) => kind.label(),
        }
    }

    pub fn parse(raw: &str) -> Self {
        PropertyType::from_label(raw).map_or(Self::All, Self::Only)
    }

    pub fn matches(self, kind: PropertyType) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == kind,
        }
    }
}

/// Result ordering for the browse grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    Newest,
    PriceLow,
    PriceHigh,
    Rating,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [Self::Newest, Self::PriceLow, Self::PriceHigh, Self::Rating];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
            Self::Rating => "rating",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Newest => "Newest First",
            Self::PriceLow => "Price: Low to High",
            Self::PriceHigh => "Price: High to Low",
            Self::Rating => "Highest Rated",
        }
    }

    /// Unknown values fall back to newest-first.
    pub fn parse(raw: &str) -> Self {
        Self::ALL.into_iter().find(|k| k.as_str() == raw).unwrap_or_default()
    }

    fn compare(self, a: &Listing, b: &Listing) -> Ordering {
        match self {
            Self::Newest => b.created_at.cmp(&a.created_at),
            Self::PriceLow => a.price.cmp(&b.price),
            Self::PriceHigh => b.price.cmp(&a.price),
            Self::Rating => b.host_rating.total_cmp(&a.host_rating),
        }
    }
}

/// Current browse filter selection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BrowseFilters {
    pub query: String,
    pub price: PriceRange,
    pub property_type: TypeFilter,
    pub sort: SortKey,
}

impl BrowseFilters {
    /// Case-insensitive substring match on title or location.
    pub fn matches_query(&self, listing: &Listing) -> bool {
        let needle = self.query.to_lowercase();
        listing.title.to_lowercase().contains(&needle) || listing.location.to_lowercase().contains(&needle)
    }

    pub fn matches(&self, listing: &Listing) -> bool {
        self.matches_query(listing)
            && self.price.matches(listing.price)
            && self.property_type.matches(listing.property_type)
    }

    /// Filter `listings` and order the survivors by the selected sort key.
    /// Ties keep their fixture order.
    pub fn apply(&self, listings: &[Listing]) -> Vec<Listing> {
        let mut out: Vec<Listing> = listings.iter().filter(|l| self.matches(l)).cloned().collect();
        out.sort_by(|a, b| self.sort.compare(a, b));
        out
    }
}

/// "Found N listing(s)" caption above the results grid.
pub fn results_caption(count: usize) -> String {
    if count == 1 {
        "Found 1 listing".to_owned()
    } else {
        format!("Found {count} listings")
    }
}
