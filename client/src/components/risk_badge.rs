//! Listing safety badge.

use leptos::prelude::*;

use crate::data::listings::RiskLevel;

#[component]
pub fn RiskBadge(report_count: u32) -> impl IntoView {
    let risk = RiskLevel::from_report_count(report_count);
    let icon = if matches!(risk, RiskLevel::VerifiedSafe) { "✔" } else { "⚠" };
    view! {
        <span class=format!("badge badge--{}", risk.variant())>
            <span class="badge__icon" aria-hidden="true">{icon}</span>
            {risk.label()}
        </span>
    }
}
