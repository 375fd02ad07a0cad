//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome and listing surfaces while reading and
//! writing the saved-listings and toast signals provided by `App`.

pub mod contact_host_modal;
pub mod footer;
pub mod listing_card;
pub mod listing_details_dialog;
pub mod navbar;
pub mod risk_badge;
pub mod toast_stack;
