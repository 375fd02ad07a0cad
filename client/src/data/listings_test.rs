use super::*;

// =============================================================
// Fixtures
// =============================================================

#[test]
fn mock_listings_have_unique_ids() {
    let listings = mock_listings();
    assert_eq!(listings.len(), 4);
    let mut ids: Vec<&str> = listings.iter().map(|l| l.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 4);
}

#[test]
fn mock_listing_ratings_stay_in_range() {
    for listing in mock_listings() {
        assert!((0.0..=5.0).contains(&listing.host_rating), "{}", listing.id);
    }
}

// =============================================================
// Serialization
// =============================================================

#[test]
fn listing_serializes_with_camel_case_keys() {
    let listing = &mock_listings()[1];
    let value = serde_json::to_value(listing).unwrap();
    assert_eq!(value["hostName"], "Mike Chen");
    assert_eq!(value["hostRating"], 4.5);
    assert_eq!(value["propertyType"], "Shared Housing");
    assert_eq!(value["reportCount"], 1);
    assert_eq!(value["verifiedHost"], true);
    assert_eq!(value["createdAt"], "2024-01-10");
    assert!(value.get("host_name").is_none());
}

#[test]
fn property_type_label_round_trips() {
    for kind in PropertyType::ALL {
        assert_eq!(PropertyType::from_label(kind.label()), Some(kind));
    }
    assert_eq!(PropertyType::from_label("Castle"), None);
}

// =============================================================
// Risk classification
// =============================================================

#[test]
fn risk_level_buckets_report_counts() {
    assert_eq!(RiskLevel::from_report_count(0), RiskLevel::VerifiedSafe);
    assert_eq!(RiskLevel::from_report_count(1), RiskLevel::Reported(1));
    assert_eq!(RiskLevel::from_report_count(2), RiskLevel::Reported(2));
    assert_eq!(RiskLevel::from_report_count(3), RiskLevel::HighRisk(3));
}

#[test]
fn risk_level_labels_pluralize() {
    assert_eq!(RiskLevel::VerifiedSafe.label(), "Verified Safe");
    assert_eq!(RiskLevel::Reported(1).label(), "1 Report");
    assert_eq!(RiskLevel::Reported(2).label(), "2 Reports");
    assert_eq!(RiskLevel::HighRisk(7).label(), "High Risk (7 Reports)");
}

#[test]
fn amenity_preview_collapses_after_three() {
    let listings = mock_listings();
    let (shown, hidden) = listings[0].amenity_preview();
    assert_eq!(shown.len(), 3);
    assert_eq!(hidden, 1);

    let (shown, hidden) = listings[1].amenity_preview();
    assert_eq!(shown.len(), 3);
    assert_eq!(hidden, 0);
}
