//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login redirects
//! and identity-dependent rendering. The session store owns the value; the app
//! mirrors it into an `RwSignal<AuthState>` context.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    /// True only while a session initialization pass is in flight.
    pub loading: bool,
}

impl AuthState {
    /// State at boot, before the first initialization pass completes.
    pub fn pending() -> Self {
        Self { user: None, loading: true }
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(User::is_admin)
    }
}

/// Storage tier holding the persisted session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionScope {
    /// `localStorage`; chosen by "remember me".
    Durable,
    /// `sessionStorage`; cleared when the tab session ends.
    Ephemeral,
}

impl SessionScope {
    pub fn from_remember(remember: bool) -> Self {
        if remember { Self::Durable } else { Self::Ephemeral }
    }
}
