//! # client
//!
//! Leptos + WASM frontend for the recipe-notes app.
//!
//! This crate contains pages, components, application state and the REST
//! calls to the recipe API. Decisions that do not need a browser (validation,
//! list phases, endpoint paths) come from the `recipes` crate so they can be
//! unit-tested natively.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs browser logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // A second init (hot reload) fails harmlessly.
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("recipe-notes client hydrating");
    leptos::mount::hydrate_body(app::App);
}
