//! Route access decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route component applies the same redirect rules, so they live here as
//! pure functions of the auth state, the active namespace and the path. The
//! guard components in `components::route_guard` only evaluate and act on them.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::state::auth::AuthState;
use crate::state::namespace::Namespace;

/// What a guarded route should do for the current navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session not reconciled yet; show a neutral placeholder.
    Loading,
    /// Session not reconciled yet; render nothing.
    Suppress,
    /// Send the visitor to sign in, remembering where they were going.
    RedirectToLogin { to: String, from: String },
    RedirectHome { to: String },
    RedirectToAdmin { to: String },
    /// Render the route's content.
    Allow,
}

impl GuardDecision {
    /// Target path when this decision is a redirect.
    pub fn redirect_target(&self) -> Option<&str> {
        match self {
            Self::RedirectToLogin { to, .. } | Self::RedirectHome { to } | Self::RedirectToAdmin { to } => Some(to),
            Self::Loading | Self::Suppress | Self::Allow => None,
        }
    }
}

/// Decide a navigation to a route that requires a signed-in user.
///
/// The admin account is confined to the admin area, and the admin area is
/// closed to everyone else.
pub fn protected_decision(auth: &AuthState, namespace: &Namespace, path: &str) -> GuardDecision {
    if auth.loading {
        return GuardDecision::Loading;
    }
    if auth.user.is_none() {
        return GuardDecision::RedirectToLogin { to: namespace.login_path(), from: path.to_owned() };
    }
    let in_admin_area = namespace.is_admin_path(path);
    let is_admin = auth.is_admin();
    if is_admin && !in_admin_area {
        return GuardDecision::RedirectToAdmin { to: namespace.admin_path() };
    }
    if !is_admin && in_admin_area {
        return GuardDecision::RedirectHome { to: namespace.home_path() };
    }
    GuardDecision::Allow
}

/// Decide a navigation to a sign-in or registration page.
///
/// `return_to` is the path a protected route redirected away from; a signed-in
/// member goes back there when it is a member page of the same namespace.
pub fn public_decision(auth: &AuthState, namespace: &Namespace, return_to: Option<&str>) -> GuardDecision {
    if auth.loading {
        return GuardDecision::Suppress;
    }
    match auth.user.as_ref() {
        None => GuardDecision::Allow,
        Some(_) if auth.is_admin() => GuardDecision::RedirectToAdmin { to: namespace.admin_path() },
        Some(_) => {
            let to = return_to
                .filter(|path| is_member_return_path(namespace, path))
                .map_or_else(|| namespace.home_path(), str::to_owned);
            GuardDecision::RedirectHome { to }
        }
    }
}

fn is_member_return_path(namespace: &Namespace, path: &str) -> bool {
    path.starts_with('/')
        && !path.starts_with("//")
        && namespace.contains(path)
        && !namespace.is_public_path(path)
        && !namespace.is_admin_path(path)
}
