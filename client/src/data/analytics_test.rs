use super::*;

#[test]
fn monthly_reports_never_resolve_more_than_filed() {
    for row in MONTHLY_REPORTS {
        assert!(row.resolved <= row.reports, "{}", row.month);
    }
}

#[test]
fn discrimination_shares_sum_to_one_hundred() {
    let total: u32 = DISCRIMINATION_TYPES.iter().map(|d| d.value).sum();
    assert_eq!(total, 100);
}

#[test]
fn high_risk_locations_fit_progress_scale() {
    for loc in HIGH_RISK_LOCATIONS {
        assert!(loc.reports <= LOCATION_REPORTS_SCALE, "{}", loc.city);
    }
}

#[test]
fn trend_caption_signs_percent() {
    assert_eq!(METRIC_TRENDS[0].caption(), "+12% from last month");
    assert_eq!(METRIC_TRENDS[3].caption(), "-3% from last month");
    assert!(METRIC_TRENDS[0].is_up());
    assert!(!METRIC_TRENDS[3].is_up());
}

#[test]
fn location_risk_labels_are_title_case() {
    assert_eq!(LocationRisk::High.label(), "High Risk");
    assert_eq!(LocationRisk::Medium.variant(), "warning");
    assert_eq!(LocationRisk::Low.variant(), "success");
}
