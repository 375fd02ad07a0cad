//! # client
//!
//! Leptos + WASM frontend for the DRAMP fair-housing platform.
//!
//! This crate contains pages, components, client-side state models, the
//! static listing and analytics fixtures, and the browser storage helpers
//! backing the saved-listings collection. The `ssr` feature renders it on
//! the host; the `hydrate` feature builds the WASM bundle.

pub mod app;
pub mod components;
pub mod data;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("dramp client hydrating");
    leptos::mount::hydrate_body(app::App);
}
