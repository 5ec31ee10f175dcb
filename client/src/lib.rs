//! # survey-client
//!
//! Leptos + WASM front end for the survey application.
//!
//! This crate binds the platform-independent `survey-session` store to the
//! browser: `localStorage`/`sessionStorage` become its storage areas,
//! `Date.now()` its clock, and every routed page is wrapped in the navigation
//! guard. Browser-only code sits behind the `csr` feature so the crate also
//! builds and tests natively.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install console logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // Fails only when a logger is already installed.
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
