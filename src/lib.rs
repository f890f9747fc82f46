//! # paperslol
//!
//! Leptos + WASM client for the paperslol exam-paper vault. Students upload
//! and browse photos of past exam papers; admins manage the whole vault.
//! Authentication is a local stubbed flow whose session is persisted to
//! browser `localStorage`, and the hosted sync service (Supabase) is an
//! opaque collaborator surfaced only as a configured/reachable indicator.
//!
//! This crate contains pages, components, application state (session store,
//! login form controller, tab router, paper vault), and the cloud status
//! probe. Browser-only code is gated behind the `hydrate` feature so the
//! state layer compiles and tests natively.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs panic/log hooks and hydrates the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
