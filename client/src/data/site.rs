//! Static copy shared by the marketing-style pages and the page chrome.

/// A label/value counter displayed in stat grids.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

/// A titled blurb, optionally linking to a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub href: Option<&'static str>,
}

/// A top-level navigation entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub href: &'static str,
}

pub const NAVIGATION: &[NavItem] = &[
    NavItem { name: "Home", href: "/" },
    NavItem { name: "Browse Listings", href: "/browse" },
    NavItem { name: "Report Discrimination", href: "/report" },
    NavItem { name: "Dashboard", href: "/dashboard" },
    NavItem { name: "About", href: "/about" },
    NavItem { name: "Contact", href: "/contact" },
];

pub const FOOTER_PLATFORM_LINKS: &[NavItem] = &[
    NavItem { name: "Browse Listings", href: "/browse" },
    NavItem { name: "Report Discrimination", href: "/report" },
    NavItem { name: "Analytics Dashboard", href: "/dashboard" },
    NavItem { name: "Saved Listings", href: "/saved" },
];

pub const FOOTER_COMPANY_LINKS: &[NavItem] = &[
    NavItem { name: "About Us", href: "/about" },
    NavItem { name: "Contact", href: "/contact" },
    NavItem { name: "FAQ", href: "/faq" },
    NavItem { name: "Safe Listings", href: "/safe-listings" },
];

// =============================================================================
// HOME
// =============================================================================

pub const HOME_STATS: &[Stat] = &[
    Stat { label: "Reports Filed", value: "2,847" },
    Stat { label: "Fair Listings", value: "15,692" },
    Stat { label: "Users Protected", value: "8,234" },
    Stat { label: "Cases Resolved", value: "1,429" },
];

pub const HOME_FEATURES: &[Feature] = &[
    Feature {
        title: "Report Discrimination",
        description: "Easily document and report housing discrimination incidents with our secure, confidential platform.",
        href: Some("/report"),
    },
    Feature {
        title: "Browse Fair Listings",
        description: "Find verified rental listings with transparent host ratings and discrimination-free policies.",
        href: Some("/browse"),
    },
    Feature {
        title: "Analytics Dashboard",
        description: "View data-driven insights on housing discrimination patterns and trends in your area.",
        href: Some("/dashboard"),
    },
];

// =============================================================================
// ABOUT
// =============================================================================

pub const ABOUT_STATS: &[Stat] = &[
    Stat { label: "Verified Listings", value: "10K+" },
    Stat { label: "Protected Users", value: "50K+" },
    Stat { label: "Discrimination Reports Prevented", value: "2.5K+" },
    Stat { label: "Trusted Hosts", value: "5K+" },
];

pub const ABOUT_VALUES: &[Feature] = &[
    Feature {
        title: "Safety First",
        description: "Every listing is verified and every host is screened to ensure a safe housing experience for all users.",
        href: None,
    },
    Feature {
        title: "Equal Opportunity",
        description: "We believe everyone deserves fair access to housing regardless of their background, identity, or circumstances.",
        href: None,
    },
    Feature {
        title: "Transparency",
        description: "Clear information, honest reviews, and open reporting help create an informed marketplace.",
        href: None,
    },
    Feature {
        title: "Accountability",
        description: "Our platform holds hosts accountable for fair practices and provides recourse for discriminatory behavior.",
        href: None,
    },
];

pub const ABOUT_PLATFORM_FEATURES: &[&str] = &[
    "Comprehensive host background verification",
    "Anonymous discrimination reporting system",
    "AI-powered bias detection in listings",
    "Legal support for discrimination cases",
    "Educational resources for fair housing",
    "Community-driven safety ratings",
];

// =============================================================================
// SAFE LISTINGS
// =============================================================================

pub const SAFETY_STATS: &[Stat] = &[
    Stat { label: "Verified Safe Listings", value: "15,692" },
    Stat { label: "Hosts Screened", value: "8,234" },
    Stat { label: "Safety Rating", value: "98.7%" },
    Stat { label: "Reports Prevented", value: "2,847" },
];

pub const VERIFICATION_FEATURES: &[Feature] = &[
    Feature {
        title: "Host Background Verification",
        description: "Comprehensive background checks and identity verification for all hosts",
        href: None,
    },
    Feature {
        title: "AI-Powered Bias Detection",
        description: "Advanced algorithms scan listings for discriminatory language and practices",
        href: None,
    },
    Feature {
        title: "Tenant Rating System",
        description: "Verified reviews from previous tenants ensure transparency and accountability",
        href: None,
    },
    Feature {
        title: "Community Safety Reports",
        description: "Real-time safety reports from our community of verified users",
        href: None,
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CitySafety {
    pub name: &'static str,
    pub listings: u32,
    pub safety_score: f64,
}

pub const ITALIAN_CITIES: &[CitySafety] = &[
    CitySafety { name: "Milan", listings: 2847, safety_score: 98.5 },
    CitySafety { name: "Rome", listings: 3126, safety_score: 97.8 },
    CitySafety { name: "Bologna", listings: 1534, safety_score: 99.2 },
    CitySafety { name: "Florence", listings: 1823, safety_score: 98.9 },
    CitySafety { name: "Naples", listings: 1267, safety_score: 96.4 },
    CitySafety { name: "Turin", listings: 1098, safety_score: 98.1 },
    CitySafety { name: "Venice", listings: 847, safety_score: 97.6 },
    CitySafety { name: "Padua", listings: 623, safety_score: 99.1 },
];

// =============================================================================
// CONTACT
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactMethod {
    pub title: &'static str,
    pub description: &'static str,
    /// Lines of the displayed value.
    pub lines: &'static [&'static str],
    pub action: Option<&'static str>,
}

pub const CONTACT_METHODS: &[ContactMethod] = &[
    ContactMethod {
        title: "Email Support",
        description: "Get help via email",
        lines: &["support@dramp.it"],
        action: Some("mailto:support@dramp.it"),
    },
    ContactMethod {
        title: "Phone Support",
        description: "Speak with our team",
        lines: &["+39 02 1234 5678"],
        action: Some("tel:+390212345678"),
    },
    ContactMethod {
        title: "Office Location",
        description: "Visit us in person",
        lines: &["Via Roma 123", "20121 Milan, Italy"],
        action: None,
    },
    ContactMethod {
        title: "Business Hours",
        description: "When we're available",
        lines: &["Mon-Fri: 9AM-6PM CET", "Weekends: 10AM-4PM CET"],
        action: None,
    },
];

pub const EMERGENCY_HOTLINE: &str = "tel:+390212345678";
