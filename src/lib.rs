//! # verdant-client
//!
//! Leptos + WASM frontend for the Verdant personal gardening manager.
//!
//! This crate contains pages, components, application state, the REST API
//! helpers, and shared DTO types. All business logic (nutrient optimization
//! math, task scheduling, persistence) lives in the backend service; this
//! client is presentation and form state only.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
