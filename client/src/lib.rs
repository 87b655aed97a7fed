//! # client
//!
//! Leptos + WASM frontend for the pageshell site.
//!
//! Two independent page behaviors live here: a persisted light/dark theme
//! toggle and a simulated loading animation that reveals the main content.
//! State models are plain Rust and test on the host; browser access is gated
//! behind the `hydrate` feature.

pub mod app;
pub mod components;
pub mod error;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install console logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        log::warn!("console logger not installed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
