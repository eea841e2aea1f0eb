//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components wire the session store and guard decisions into the Leptos
//! context tree; pages compose them.

pub mod logout_button;
pub mod route_guard;
pub mod session_provider;
