use super::*;
use crate::data::listings::mock_listings;

fn ids(listings: &[Listing]) -> Vec<&str> {
    listings.iter().map(|l| l.id.as_str()).collect()
}

fn filters() -> BrowseFilters {
    BrowseFilters::default()
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_filters_keep_everything_newest_first() {
    let out = filters().apply(&mock_listings());
    assert_eq!(ids(&out), ["3", "1", "2", "4"]);
}

// =============================================================
// Text query
// =============================================================

#[test]
fn query_matches_title_case_insensitively() {
    let f = BrowseFilters { query: "STUDIO".to_owned(), ..filters() };
    assert_eq!(ids(&f.apply(&mock_listings())), ["3"]);
}

#[test]
fn query_matches_location() {
    let f = BrowseFilters { query: "austin".to_owned(), ..filters() };
    assert_eq!(ids(&f.apply(&mock_listings())), ["4"]);
}

#[test]
fn query_does_not_search_description() {
    let f = BrowseFilters { query: "utilities".to_owned(), ..filters() };
    assert!(f.apply(&mock_listings()).is_empty());
}

#[test]
fn query_without_hits_is_empty() {
    let f = BrowseFilters { query: "chalet".to_owned(), ..filters() };
    assert!(f.apply(&mock_listings()).is_empty());
}

// =============================================================
// Price buckets
// =============================================================

#[test]
fn price_buckets_partition_fixtures() {
    let listings = mock_listings();
    let cases = [
        (PriceRange::UpTo1000, vec!["2", "4"]),
        (PriceRange::From1000To1500, vec![]),
        (PriceRange::From1500To2000, vec!["1"]),
        (PriceRange::Over2000, vec!["3"]),
    ];
    for (price, expected) in cases {
        let f = BrowseFilters { price, sort: SortKey::PriceHigh, ..filters() };
        assert_eq!(ids(&f.apply(&listings)), expected, "{price:?}");
    }
}

#[test]
fn price_bucket_boundaries_are_inclusive_above() {
    assert!(PriceRange::UpTo1000.matches(1000));
    assert!(!PriceRange::From1000To1500.matches(1000));
    assert!(PriceRange::From1000To1500.matches(1500));
    assert!(PriceRange::From1500To2000.matches(2000));
    assert!(!PriceRange::Over2000.matches(2000));
    assert!(PriceRange::Over2000.matches(2001));
}

#[test]
fn price_range_parse_accepts_select_values() {
    for range in PriceRange::ALL {
        assert_eq!(PriceRange::parse(range.as_str()), range);
    }
    assert_eq!(PriceRange::parse(""), PriceRange::All);
    assert_eq!(PriceRange::parse("bogus"), PriceRange::All);
}

// =============================================================
// Property type
// =============================================================

#[test]
fn type_filter_matches_exactly() {
    let f = BrowseFilters { property_type: TypeFilter::Only(PropertyType::SharedHousing), ..filters() };
    assert_eq!(ids(&f.apply(&mock_listings())), ["2"]);
}

#[test]
fn type_filter_parse_handles_all_and_empty() {
    assert_eq!(TypeFilter::parse("all-types"), TypeFilter::All);
    assert_eq!(TypeFilter::parse(""), TypeFilter::All);
    assert_eq!(TypeFilter::parse("Room"), TypeFilter::Only(PropertyType::Room));
    assert_eq!(TypeFilter::Only(PropertyType::Studio).as_str(), "Studio");
}

// =============================================================
// Combined filters
// =============================================================

#[test]
fn filters_combine_with_and() {
    let f = BrowseFilters {
        query: "new york".to_owned(),
        price: PriceRange::UpTo1000,
        property_type: TypeFilter::Only(PropertyType::SharedHousing),
        sort: SortKey::Newest,
    };
    assert_eq!(ids(&f.apply(&mock_listings())), ["2"]);

    let f = BrowseFilters { property_type: TypeFilter::Only(PropertyType::Studio), ..f };
    assert!(f.apply(&mock_listings()).is_empty());
}

// =============================================================
// Sorting
// =============================================================

#[test]
fn sort_price_low_to_high() {
    let f = BrowseFilters { sort: SortKey::PriceLow, ..filters() };
    assert_eq!(ids(&f.apply(&mock_listings())), ["4", "2", "1", "3"]);
}

#[test]
fn sort_price_high_to_low() {
    let f = BrowseFilters { sort: SortKey::PriceHigh, ..filters() };
    assert_eq!(ids(&f.apply(&mock_listings())), ["3", "1", "2", "4"]);
}

#[test]
fn sort_by_rating_descending() {
    let f = BrowseFilters { sort: SortKey::Rating, ..filters() };
    assert_eq!(ids(&f.apply(&mock_listings())), ["3", "1", "2", "4"]);
}

#[test]
fn sort_is_stable_on_ties() {
    let mut listings = mock_listings();
    for listing in &mut listings {
        listing.price = 1200;
    }
    let f = BrowseFilters { sort: SortKey::PriceLow, ..filters() };
    assert_eq!(ids(&f.apply(&listings)), ["1", "2", "3", "4"]);
}

#[test]
fn sort_key_parse_falls_back_to_newest() {
    for key in SortKey::ALL {
        assert_eq!(SortKey::parse(key.as_str()), key);
    }
    assert_eq!(SortKey::parse("oldest"), SortKey::Newest);
}

#[test]
fn apply_leaves_source_untouched() {
    let listings = mock_listings();
    let f = BrowseFilters { sort: SortKey::PriceLow, ..filters() };
    let _ = f.apply(&listings);
    assert_eq!(ids(&listings), ["1", "2", "3", "4"]);
}

#[test]
fn results_caption_pluralizes() {
    assert_eq!(results_caption(0), "Found 0 listings");
    assert_eq!(results_caption(1), "Found 1 listing");
    assert_eq!(results_caption(4), "Found 4 listings");
}
