//! # detector-client
//!
//! Leptos + WASM frontend for the language detector.
//!
//! A single page posts text to `/detect` and renders the detected language,
//! a code/natural-language badge, and the confidence. The same crate is
//! compiled with `ssr` for server rendering and with `hydrate` for the
//! browser bundle.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
