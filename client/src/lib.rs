//! # dashboard-client
//!
//! Leptos + WASM frontend for the vehicle access-control dashboard.
//!
//! This crate contains the navigation shell (app bar, drawer menu, router),
//! the route-level pages, the injectable home-page data source, and the
//! document-store reader. It is compiled with `ssr` for the Axum server and
//! with `hydrate` for the browser bundle.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
