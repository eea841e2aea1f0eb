//! # nhau
//!
//! Leptos + WASM frontend for the nhau voting app: registration, sign-in,
//! session persistence and route-level access control.
//!
//! The session store (`state::session`) and the access guard (`util::auth`)
//! carry the behavior; pages and components are thin glue around them.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
