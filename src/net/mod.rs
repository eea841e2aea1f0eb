//! Networking modules for the auth/data REST service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` defines the collaborator traits and their HTTP implementations;
//! `types` defines the shared wire schema.

pub mod api;
pub mod types;
