//! Session namespaces derived from the URL path prefix.
//!
//! SYSTEM CONTEXT
//! ==============
//! Two deployments share one origin and therefore one `localStorage` and
//! `sessionStorage`. Each keeps an isolated session under its own storage key.
//! The namespace is resolved once per navigation and handed to both the
//! session store and the route guards.

#[cfg(test)]
#[path = "namespace_test.rs"]
mod namespace_test;

/// Screens every namespace serves, relative to its prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Home,
    Login,
    Register,
    Admin,
}

/// A deployment variant identified by its path prefix.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Namespace {
    /// Path prefix without trailing slash; empty for the root deployment.
    pub prefix: String,
    /// Storage key holding the serialized user in either tier.
    pub storage_key: String,
}

impl Namespace {
    pub fn new(prefix: &str, storage_key: &str) -> Self {
        Self { prefix: prefix.to_owned(), storage_key: storage_key.to_owned() }
    }

    pub fn login_path(&self) -> String {
        format!("{}/login", self.prefix)
    }

    pub fn register_path(&self) -> String {
        format!("{}/register", self.prefix)
    }

    pub fn home_path(&self) -> String {
        if self.prefix.is_empty() { "/".to_owned() } else { self.prefix.clone() }
    }

    pub fn admin_path(&self) -> String {
        format!("{}/admin", self.prefix)
    }

    /// Whether `path` lies under this namespace's prefix on a segment boundary.
    pub fn contains(&self, path: &str) -> bool {
        has_segment_prefix(path, &self.prefix)
    }

    /// Whether `path` is inside this namespace's restricted admin area.
    pub fn is_admin_path(&self, path: &str) -> bool {
        has_segment_prefix(path, &self.admin_path())
    }

    /// Whether `path` is one of this namespace's public (login/register) pages.
    pub fn is_public_path(&self, path: &str) -> bool {
        has_segment_prefix(path, &self.login_path()) || has_segment_prefix(path, &self.register_path())
    }

    /// Screen addressed by `path`, or `None` for an unknown or foreign path.
    pub fn screen_for(&self, path: &str) -> Option<Screen> {
        if !self.contains(path) {
            return None;
        }
        let rest = path[self.prefix.len()..].split(['?', '#']).next().unwrap_or_default();
        match rest.trim_end_matches('/') {
            "" => Some(Screen::Home),
            "/login" => Some(Screen::Login),
            "/register" => Some(Screen::Register),
            "/admin" => Some(Screen::Admin),
            other if other.starts_with("/admin/") => Some(Screen::Admin),
            _ => None,
        }
    }
}

/// Pick the namespace with the longest prefix matching `path`.
///
/// Falls back to the root namespace (empty prefix), or the first configured
/// one if no root exists.
pub fn resolve<'a>(namespaces: &'a [Namespace], path: &str) -> Option<&'a Namespace> {
    namespaces
        .iter()
        .filter(|ns| ns.contains(path))
        .max_by_key(|ns| ns.prefix.len())
        .or_else(|| namespaces.first())
}

fn has_segment_prefix(path: &str, prefix: &str) -> bool {
    if prefix.is_empty() {
        return true;
    }
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/') || rest.starts_with('?') || rest.starts_with('#'),
        None => false,
    }
}
