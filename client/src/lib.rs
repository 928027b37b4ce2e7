//! # client
//!
//! Leptos + WASM front end for Verdant, a garden and landscaping service
//! dashboard. Admins manage clients, workers, sites, tasks and stock; workers
//! run their assigned tasks and upload photos; clients follow progress and
//! rate finished work.
//!
//! The crate is rendered on the server (`ssr`) and hydrated in the browser
//! (`hydrate`). All data comes from the backend REST API through `net`.

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
