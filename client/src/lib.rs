//! # client
//!
//! Leptos + WASM frontend for the portal sign-in flow: login, registration
//! with photo upload, and the post-registration landing page.
//!
//! This crate contains pages, components, client state, and the REST calls
//! to the remote user API. Validation rules and response handling come from
//! the `forms` crate.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
