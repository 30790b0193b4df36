//! # dam-client
//!
//! Leptos + WASM frontend for the DAM login screen. Replaces the React
//! `frontend/dam` login component with a Rust-native UI layer.
//!
//! This crate contains the login page, the credential form component, and
//! the form state model. Submitted credentials are handed to a
//! caller-supplied handler; authentication itself lives behind an API this
//! crate does not call.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;

/// Browser entry point: attach reactivity to the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    leptos::mount::hydrate_body(App);
}
