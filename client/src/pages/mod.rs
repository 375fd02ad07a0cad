//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Form and filter logic lives in `state` so pages stay thin.

pub mod about;
pub mod auth_stub;
pub mod browse;
pub mod contact;
pub mod dashboard;
pub mod faq;
pub mod home;
pub mod not_found;
pub mod report;
pub mod safe_listings;
pub mod saved_listings;

#[cfg(test)]
#[path = "pages_test.rs"]
mod pages_test;
