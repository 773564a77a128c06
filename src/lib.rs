//! # oauth-playground
//!
//! Leptos + WASM client for the OAuth Playground application.
//!
//! The core is the authentication session lifecycle: the `session`
//! module derives authentication status from persisted tokens at
//! startup, drives login/logout, and publishes session state to the
//! component tree; `pages` holds the route components that consume it.

pub mod app;
pub mod pages;
pub mod session;
pub mod state;
pub mod util;

/// WASM entry point: installs the panic hook and console logger, then
/// hydrates the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(App);
}
