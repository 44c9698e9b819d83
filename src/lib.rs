//! # blogsphere
//!
//! Leptos + WASM client for the BlogSphere blogging platform.
//!
//! The crate is split into a framework-free core and a thin UI layer:
//!
//! - `session` and `net` hold the token store, the shared request pipeline
//!   with its 401 teardown, the session manager and the resource services.
//!   They run on any target and are unit tested natively.
//! - `app`, `pages`, `components`, `state` and `util` render the UI with
//!   Leptos and read the core through context.
//!
//! Browser bindings (`localStorage`, `fetch`, `window.location`) are compiled
//! only with the `csr` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod services;
pub mod session;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_support;

/// WASM entry point: install panic and log hooks, then mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // Only fails when a logger is already installed.
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
