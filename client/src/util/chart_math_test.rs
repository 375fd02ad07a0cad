use super::*;

#[test]
fn bar_percent_scales_to_max() {
    assert_eq!(bar_percent(67, 67), 100.0);
    assert_eq!(bar_percent(0, 67), 0.0);
    assert!((bar_percent(45, 150) - 30.0).abs() < 1e-9);
}

#[test]
fn bar_percent_clamps_and_handles_zero_max() {
    assert_eq!(bar_percent(10, 0), 0.0);
    assert_eq!(bar_percent(200, 150), 100.0);
}

#[test]
fn pie_slices_are_contiguous_and_cover_circle() {
    let slices = pie_slices(&[35, 28, 15, 12, 10]);
    assert_eq!(slices.len(), 5);
    assert_eq!(slices[0].start, 0.0);
    for pair in slices.windows(2) {
        assert!((pair[0].end - pair[1].start).abs() < 1e-9);
    }
    assert!((slices[4].end - 100.0).abs() < 1e-9);
    assert_eq!(slices[0].share_label(), "35%");
}

#[test]
fn pie_slices_of_zero_total_are_empty_wedges() {
    let slices = pie_slices(&[0, 0]);
    assert!(slices.iter().all(|s| s.share() == 0.0));
}

#[test]
fn conic_gradient_pairs_colors_with_stops() {
    let slices = pie_slices(&[1, 1]);
    let css = conic_gradient(&slices, &["#111", "#222"]);
    assert_eq!(css, "conic-gradient(#111 0.00% 50.00%, #222 50.00% 100.00%)");
}
