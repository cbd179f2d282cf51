//! # summarizer-client
//!
//! Leptos + WASM frontend for the StackOverflow summarizer.
//!
//! The page collects a StackOverflow question URL or a free-form technical
//! question, asks the summarizer backend for a structured summary, renders it,
//! and optionally opens a follow-up chat seeded with that summary. All model
//! work happens in the backend; this crate owns form validation, the request
//! lifecycle, and presentation state.
//!
//! Browser-only code paths (HTTP, clipboard, timers) are gated behind the
//! `hydrate` feature so the state modules stay testable natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrates the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
