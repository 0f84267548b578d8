//! # client
//!
//! Leptos + WASM frontend for Spectrum.
//!
//! This crate contains the route table and switch, route-level views, app
//! chrome components, shared state, and REST helpers. The server crate renders
//! it with SSR; the `hydrate` entry point takes over in the browser.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod net;
pub mod routing;
pub mod settings;
pub mod state;
pub mod util;
pub mod views;

/// Browser entry point: installs logging and hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;
    use leptos::prelude::*;

    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logger unavailable: {e}").into());
    }

    let settings = settings::ClientSettings::from_document();
    log::debug!("hydrating, maintenance mode: {}", settings.maintenance_mode);
    leptos::mount::hydrate_body(move || {
        provide_context(settings);
        view! { <App/> }
    });
}
