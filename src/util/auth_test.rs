use super::*;
use crate::net::types::{Role, User};

fn member() -> User {
    User { id: "u1".to_owned(), email: "alice@example.com".to_owned(), role: Role::Member, profile: Default::default() }
}

fn admin() -> User {
    User { id: "a1".to_owned(), email: "admin@nhau.app".to_owned(), role: Role::Admin, profile: Default::default() }
}

fn loaded(user: Option<User>) -> AuthState {
    AuthState { user, loading: false }
}

fn root() -> Namespace {
    Namespace::new("", "nhau_user")
}

fn v2() -> Namespace {
    Namespace::new("/v2", "nhau_v2_user")
}

// =============================================================
// protected_decision
// =============================================================

#[test]
fn protected_shows_loading_regardless_of_user() {
    for user in [None, Some(member()), Some(admin())] {
        let state = AuthState { user, loading: true };
        assert_eq!(protected_decision(&state, &root(), "/polls"), GuardDecision::Loading);
    }
}

#[test]
fn protected_redirects_anonymous_to_namespace_login_with_origin() {
    assert_eq!(
        protected_decision(&loaded(None), &root(), "/polls/7"),
        GuardDecision::RedirectToLogin { to: "/login".to_owned(), from: "/polls/7".to_owned() }
    );
    assert_eq!(
        protected_decision(&loaded(None), &v2(), "/v2/polls"),
        GuardDecision::RedirectToLogin { to: "/v2/login".to_owned(), from: "/v2/polls".to_owned() }
    );
}

#[test]
fn protected_confines_admin_to_admin_area() {
    let state = loaded(Some(admin()));
    for path in ["/", "/polls", "/profile", "/administrator"] {
        assert_eq!(
            protected_decision(&state, &root(), path),
            GuardDecision::RedirectToAdmin { to: "/admin".to_owned() }
        );
    }
    assert_eq!(protected_decision(&state, &root(), "/admin"), GuardDecision::Allow);
    assert_eq!(protected_decision(&state, &root(), "/admin/users"), GuardDecision::Allow);
    assert_eq!(
        protected_decision(&state, &v2(), "/v2"),
        GuardDecision::RedirectToAdmin { to: "/v2/admin".to_owned() }
    );
}

#[test]
fn protected_keeps_members_out_of_admin_area() {
    let state = loaded(Some(member()));
    assert_eq!(protected_decision(&state, &root(), "/admin"), GuardDecision::RedirectHome { to: "/".to_owned() });
    assert_eq!(protected_decision(&state, &v2(), "/v2/admin"), GuardDecision::RedirectHome { to: "/v2".to_owned() });
}

#[test]
fn protected_allows_members_elsewhere() {
    let state = loaded(Some(member()));
    assert_eq!(protected_decision(&state, &root(), "/"), GuardDecision::Allow);
    assert_eq!(protected_decision(&state, &root(), "/polls/7"), GuardDecision::Allow);
}

// =============================================================
// public_decision
// =============================================================

#[test]
fn public_renders_nothing_while_loading() {
    let state = AuthState { user: Some(member()), loading: true };
    assert_eq!(public_decision(&state, &root(), None), GuardDecision::Suppress);
}

#[test]
fn public_allows_anonymous_visitors() {
    assert_eq!(public_decision(&loaded(None), &root(), None), GuardDecision::Allow);
}

#[test]
fn public_sends_member_home() {
    assert_eq!(
        public_decision(&loaded(Some(member())), &root(), None),
        GuardDecision::RedirectHome { to: "/".to_owned() }
    );
    assert_eq!(
        public_decision(&loaded(Some(member())), &v2(), None),
        GuardDecision::RedirectHome { to: "/v2".to_owned() }
    );
}

#[test]
fn public_sends_admin_to_admin_area() {
    assert_eq!(
        public_decision(&loaded(Some(admin())), &root(), Some("/polls")),
        GuardDecision::RedirectToAdmin { to: "/admin".to_owned() }
    );
}

#[test]
fn public_returns_member_to_requested_page() {
    assert_eq!(
        public_decision(&loaded(Some(member())), &v2(), Some("/v2/polls/3")),
        GuardDecision::RedirectHome { to: "/v2/polls/3".to_owned() }
    );
}

#[test]
fn public_ignores_unsafe_return_paths() {
    let state = loaded(Some(member()));
    let home = GuardDecision::RedirectHome { to: "/v2".to_owned() };
    for path in ["/v2/login", "/v2/admin", "/polls", "//evil.example", "https://evil.example"] {
        assert_eq!(public_decision(&state, &v2(), Some(path)), home, "{path}");
    }
}

#[test]
fn redirect_target_only_for_redirects() {
    assert_eq!(GuardDecision::Allow.redirect_target(), None);
    assert_eq!(GuardDecision::Loading.redirect_target(), None);
    assert_eq!(GuardDecision::RedirectHome { to: "/".to_owned() }.redirect_target(), Some("/"));
}
