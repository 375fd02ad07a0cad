//! Analytics dashboard rendered from static figures.
//!
//! Charts are plain CSS: bar heights are percentages of the tallest month and
//! the pie is a single `conic-gradient` background.

use leptos::prelude::*;

use crate::data::analytics::{
    DISCRIMINATION_TYPES, HIGH_RISK_LOCATIONS, KEY_METRICS, LOCATION_REPORTS_SCALE, METRIC_TRENDS, MONTHLY_REPORTS,
    RECENT_ACTIVITY,
};
use crate::util::chart_math::{bar_percent, conic_gradient, pie_slices};
use crate::util::format::thousands;

fn metric_cards() -> impl IntoView {
    let values = [
        thousands(KEY_METRICS.total_reports),
        thousands(KEY_METRICS.total_listings),
        thousands(KEY_METRICS.total_users),
        format!("{}%", KEY_METRICS.resolution_rate),
    ];
    METRIC_TRENDS
        .into_iter()
        .zip(values)
        .map(|(trend, value)| {
            view! {
                <article class="card metric">
                    <span class="metric__label">{trend.label}</span>
                    <span class="metric__value">{value}</span>
                    <span class="metric__trend" class:metric__trend--down=!trend.is_up()>
                        {if trend.is_up() { "▲ " } else { "▼ " }}
                        {trend.caption()}
                    </span>
                </article>
            }
        })
        .collect_view()
}

fn monthly_chart() -> impl IntoView {
    let max = MONTHLY_REPORTS.iter().map(|m| m.reports.max(m.resolved)).max().unwrap_or(0);
    let columns = MONTHLY_REPORTS
        .iter()
        .map(|m| {
            view! {
                <div class="bar-chart__column">
                    <div class="bar-chart__bars">
                        <div
                            class="bar-chart__bar bar-chart__bar--reports"
                            title=format!("{} reports", m.reports)
                            style:height=format!("{:.1}%", bar_percent(m.reports, max))
                        ></div>
                        <div
                            class="bar-chart__bar bar-chart__bar--resolved"
                            title=format!("{} resolved", m.resolved)
                            style:height=format!("{:.1}%", bar_percent(m.resolved, max))
                        ></div>
                    </div>
                    <span class="bar-chart__label">{m.month}</span>
                </div>
            }
        })
        .collect_view();

    view! {
        <article class="card chart">
            <h3>"Monthly Reports"</h3>
            <p class="muted">"Reports filed and resolved over the last six months"</p>
            <div class="bar-chart">{columns}</div>
            <div class="chart__legend">
                <span class="legend-dot legend-dot--reports"></span>
                "Reports"
                <span class="legend-dot legend-dot--resolved"></span>
                "Resolved"
            </div>
        </article>
    }
}

fn discrimination_pie() -> impl IntoView {
    let values: Vec<u32> = DISCRIMINATION_TYPES.iter().map(|d| d.value).collect();
    let colors: Vec<&str> = DISCRIMINATION_TYPES.iter().map(|d| d.color).collect();
    let slices = pie_slices(&values);
    let background = conic_gradient(&slices, &colors);

    let legend = DISCRIMINATION_TYPES
        .iter()
        .zip(slices)
        .map(|(d, slice)| {
            view! {
                <li class="pie__legend-item">
                    <span class="legend-dot" style:background-color=d.color></span>
                    {d.name}
                    <span class="muted">{slice.share_label()}</span>
                </li>
            }
        })
        .collect_view();

    view! {
        <article class="card chart">
            <h3>"Discrimination Types"</h3>
            <p class="muted">"Share of reports by category"</p>
            <div class="pie" style:background=background></div>
            <ul class="pie__legend">{legend}</ul>
        </article>
    }
}

fn location_list() -> impl IntoView {
    HIGH_RISK_LOCATIONS
        .iter()
        .map(|loc| {
            view! {
                <li class="location">
                    <div class="location__header">
                        <span>"📍 " {loc.city}</span>
                        <span class=format!("badge badge--{}", loc.risk.variant())>{loc.risk.label()}</span>
                    </div>
                    <div class="progress">
                        <div
                            class="progress__bar"
                            style:width=format!("{:.1}%", bar_percent(loc.reports, LOCATION_REPORTS_SCALE))
                        ></div>
                    </div>
                    <span class="muted">{format!("{} reports", loc.reports)}</span>
                </li>
            }
        })
        .collect_view()
}

fn activity_feed() -> impl IntoView {
    RECENT_ACTIVITY
        .iter()
        .map(|item| {
            view! {
                <li class="activity">
                    <div class="activity__body">
                        <p class="activity__title">{item.title}</p>
                        <p class="muted">{item.detail}</p>
                        <span class="activity__age">{item.age}</span>
                    </div>
                    <span class=format!("badge badge--{}", item.variant)>{item.badge}</span>
                </li>
            }
        })
        .collect_view()
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <div class="dashboard">
            <header class="page-header">
                <h1>"Analytics Dashboard"</h1>
                <p class="muted">"Housing discrimination insights and platform activity"</p>
            </header>

            <section class="metric-grid">{metric_cards()}</section>

            <section class="chart-grid">
                {monthly_chart()}
                {discrimination_pie()}
            </section>

            <section class="chart-grid">
                <article class="card">
                    <h3>"High-Risk Locations"</h3>
                    <p class="muted">"Cities with the most discrimination reports"</p>
                    <ul class="location-list">{location_list()}</ul>
                </article>
                <article class="card">
                    <h3>"Recent Activity"</h3>
                    <p class="muted">"Latest reports and verifications"</p>
                    <ul class="activity-list">{activity_feed()}</ul>
                </article>
            </section>
        </div>
    }
}
