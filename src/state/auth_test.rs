use super::*;
use crate::net::types::Role;

// =============================================================
// AuthState
// =============================================================

#[test]
fn auth_state_default_no_user_not_loading() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.loading);
}

#[test]
fn auth_state_pending_is_loading() {
    let state = AuthState::pending();
    assert!(state.user.is_none());
    assert!(state.loading);
}

#[test]
fn auth_state_is_admin_follows_user_role() {
    let mut user = User { id: "u1".to_owned(), email: "a@b".to_owned(), role: Role::Member, profile: Default::default() };
    let mut state = AuthState { user: Some(user.clone()), loading: false };
    assert!(!state.is_admin());

    user.role = Role::Admin;
    state.user = Some(user);
    assert!(state.is_admin());

    state.user = None;
    assert!(!state.is_admin());
}

// =============================================================
// SessionScope
// =============================================================

#[test]
fn session_scope_from_remember_flag() {
    assert_eq!(SessionScope::from_remember(true), SessionScope::Durable);
    assert_eq!(SessionScope::from_remember(false), SessionScope::Ephemeral);
}
