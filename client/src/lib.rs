//! # client
//!
//! Leptos + WASM store assistant chat widget.
//!
//! This crate contains the chat page, its components, the reactive state
//! wrappers around `chatcore`, and the browser `StoreApi` transport. The
//! widget host renders it on the server (`ssr`) and the browser hydrates
//! it (`hydrate`).

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
