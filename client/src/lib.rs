//! # client
//!
//! Leptos + WASM admin UI for the book catalog backend.
//!
//! The crate is rendered on the server by the `catalog-admin` host (`ssr`
//! feature) and hydrated in the browser (`hydrate` feature), where all
//! backend calls happen. Pages own their list state; components are
//! presentational and talk back through callbacks.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs logging and hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("console logger unavailable: {err}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
