//! Static figures for the analytics dashboard.

#[cfg(test)]
#[path = "analytics_test.rs"]
mod analytics_test;

/// Headline platform counters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyMetrics {
    pub total_reports: u32,
    pub total_listings: u32,
    pub total_users: u32,
    /// Percent of reports resolved.
    pub resolution_rate: u32,
}

pub const KEY_METRICS: KeyMetrics = KeyMetrics {
    total_reports: 1247,
    total_listings: 8934,
    total_users: 15672,
    resolution_rate: 78,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonthlyReports {
    pub month: &'static str,
    pub reports: u32,
    pub resolved: u32,
}

pub const MONTHLY_REPORTS: &[MonthlyReports] = &[
    MonthlyReports { month: "Jan", reports: 45, resolved: 38 },
    MonthlyReports { month: "Feb", reports: 52, resolved: 41 },
    MonthlyReports { month: "Mar", reports: 38, resolved: 35 },
    MonthlyReports { month: "Apr", reports: 61, resolved: 48 },
    MonthlyReports { month: "May", reports: 55, resolved: 52 },
    MonthlyReports { month: "Jun", reports: 67, resolved: 58 },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DiscriminationShare {
    pub name: &'static str,
    pub value: u32,
    pub color: &'static str,
}

pub const DISCRIMINATION_TYPES: &[DiscriminationShare] = &[
    DiscriminationShare { name: "Race/Ethnicity", value: 35, color: "#8b5cf6" },
    DiscriminationShare { name: "National Origin", value: 28, color: "#06b6d4" },
    DiscriminationShare { name: "Religion", value: 15, color: "#10b981" },
    DiscriminationShare { name: "Gender", value: 12, color: "#f59e0b" },
    DiscriminationShare { name: "Other", value: 10, color: "#ef4444" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LocationRisk {
    High,
    Medium,
    Low,
}

impl LocationRisk {
    pub fn label(self) -> &'static str {
        match self {
            Self::High => "High Risk",
            Self::Medium => "Medium Risk",
            Self::Low => "Low Risk",
        }
    }

    pub fn variant(self) -> &'static str {
        match self {
            Self::High => "destructive",
            Self::Medium => "warning",
            Self::Low => "success",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LocationReports {
    pub city: &'static str,
    pub reports: u32,
    pub risk: LocationRisk,
}

/// Report count that fills a location's progress bar.
pub const LOCATION_REPORTS_SCALE: u32 = 150;

pub const HIGH_RISK_LOCATIONS: &[LocationReports] = &[
    LocationReports { city: "New York", reports: 125, risk: LocationRisk::High },
    LocationReports { city: "Los Angeles", reports: 89, risk: LocationRisk::Medium },
    LocationReports { city: "Chicago", reports: 76, risk: LocationRisk::Medium },
    LocationReports { city: "Boston", reports: 45, risk: LocationRisk::Low },
    LocationReports { city: "San Francisco", reports: 38, risk: LocationRisk::Low },
];

/// Month-over-month change shown under each key metric.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Trend {
    pub label: &'static str,
    pub percent: i32,
}

pub const METRIC_TRENDS: [Trend; 4] = [
    Trend { label: "Total Reports", percent: 12 },
    Trend { label: "Verified Listings", percent: 8 },
    Trend { label: "Active Users", percent: 15 },
    Trend { label: "Resolution Rate", percent: -3 },
];

impl Trend {
    pub fn caption(self) -> String {
        if self.percent >= 0 {
            format!("+{}% from last month", self.percent)
        } else {
            format!("{}% from last month", self.percent)
        }
    }

    pub fn is_up(self) -> bool {
        self.percent >= 0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActivityItem {
    pub title: &'static str,
    pub detail: &'static str,
    pub age: &'static str,
    pub badge: &'static str,
    pub variant: &'static str,
}

pub const RECENT_ACTIVITY: &[ActivityItem] = &[
    ActivityItem {
        title: "New discrimination report filed",
        detail: "Race-based discrimination reported in Boston, MA apartment complex",
        age: "2 hours ago",
        badge: "High Priority",
        variant: "destructive",
    },
    ActivityItem {
        title: "Listing verified as safe",
        detail: "New York apartment complex passed verification checks",
        age: "4 hours ago",
        badge: "Verified",
        variant: "success",
    },
    ActivityItem {
        title: "New user milestone reached",
        detail: "Platform now has over 15,000 registered users",
        age: "6 hours ago",
        badge: "Milestone",
        variant: "outline",
    },
];
