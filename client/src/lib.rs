//! # teplo-client
//!
//! Leptos + WASM frontend for the Teplo booking site: the public landing
//! page with its booking form, and the admin views over booking requests,
//! bookings, houses and the audit log.
//!
//! Built with `ssr` it is rendered by the `teplo-site` server; built with
//! `hydrate` it runs in the browser and talks to the REST backend.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install console logging and hydrate the server HTML.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
