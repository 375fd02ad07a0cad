//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by page concern (`browse`, `report`, `contact`) plus the
//! two app-wide contexts (`saved`, `toast`) so components depend on small
//! focused models that can be unit tested without a browser.

pub mod browse;
pub mod contact;
pub mod report;
pub mod saved;
pub mod toast;
