//! Geometry for the dashboard's CSS bar and pie charts.

#[cfg(test)]
#[path = "chart_math_test.rs"]
mod chart_math_test;

/// Height of `value` as a percentage of `max`, in `0.0..=100.0`.
pub fn bar_percent(value: u32, max: u32) -> f64 {
    if max == 0 {
        return 0.0;
    }
    (f64::from(value) / f64::from(max) * 100.0).clamp(0.0, 100.0)
}

/// One pie wedge expressed as a start/end percentage of the full circle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PieSlice {
    pub start: f64,
    pub end: f64,
}

impl PieSlice {
    pub fn share(self) -> f64 {
        self.end - self.start
    }

    /// Rounded share label, e.g. `"35%"`.
    pub fn share_label(self) -> String {
        format!("{:.0}%", self.share())
    }
}

/// Consecutive wedges for `values`. An all-zero input yields zero-width wedges.
pub fn pie_slices(values: &[u32]) -> Vec<PieSlice> {
    let total: u64 = values.iter().map(|v| u64::from(*v)).sum();
    let mut cursor = 0.0;
    values
        .iter()
        .map(|v| {
            #[allow(clippy::cast_precision_loss)]
            let share = if total == 0 { 0.0 } else { f64::from(*v) / total as f64 * 100.0 };
            let slice = PieSlice { start: cursor, end: cursor + share };
            cursor += share;
            slice
        })
        .collect()
}

/// CSS `conic-gradient` painting `slices` with the paired colors.
pub fn conic_gradient(slices: &[PieSlice], colors: &[&str]) -> String {
    let stops: Vec<String> = slices
        .iter()
        .zip(colors)
        .map(|(s, color)| format!("{color} {:.2}% {:.2}%", s.start, s.end))
        .collect();
    format!("conic-gradient({})", stops.join(", "))
}
