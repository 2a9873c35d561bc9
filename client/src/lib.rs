//! # client
//!
//! Leptos + WASM frontend for Anima: sign-in and sign-up screens, an
//! auth-aware navbar, a guarded `/home` area, and a small items demo.
//!
//! The crate is rendered on the server (`ssr`) and hydrated in the browser
//! (`hydrate`). Everything that touches the browser or the network is gated
//! on `hydrate`; the rest is plain logic tested natively.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
