//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `auth` is the plain state read by guards and components, `namespace`
//! partitions browser storage per deployment, and `session` owns mutation and
//! persistence of the auth state.

pub mod auth;
pub mod namespace;
pub mod session;
