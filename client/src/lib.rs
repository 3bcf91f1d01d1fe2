//! # ratio-client
//!
//! Leptos + WASM frontend for the Ratio personnel console.
//!
//! This crate contains pages, components, application state, REST helpers,
//! and the static chart datasets shown on the operator detail screen. The
//! `ratio-server` crate renders it with SSR and the `hydrate` feature builds
//! the browser bundle.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs console logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
