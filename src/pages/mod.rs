//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns form-level orchestration and delegates session changes to
//! the session store; access rules stay in the route guards.

pub mod admin;
pub mod home;
pub mod login;
pub mod register;
