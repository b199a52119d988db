//! # legalsuite
//!
//! Leptos + WASM dashboard for legal practice management: case overview,
//! contract comparison, research browsing, client tracking, courtroom
//! simulation, integrations, and settings.
//!
//! Nearly all data is seeded in memory on mount. The only remote calls are
//! the two contract-analysis webhooks in `net::webhook`; everything else is
//! presentation state owned by the page that renders it.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(App);
}
