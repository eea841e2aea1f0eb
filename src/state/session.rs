//! Session store: the single source of truth for the signed-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Bridges in-memory [`AuthState`] with the two persisted tiers and reconciles
//! a cached session against the data service on startup. Route guards read the
//! state; pages mutate it through `login`, `logout`, `update_user` and the
//! `sign_in`/`register` wrappers.
//!
//! CONCURRENCY
//! ===========
//! Single-threaded: the handle is an `Rc` and no `RefCell` borrow is held
//! across an `.await`. Every mutation and every initialization pass bumps a
//! generation token; an initialization pass applies results only while its
//! token is current, so late results from a superseded pass are dropped.
//! `loading` is cleared by a drop guard owned by the latest pass.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::rc::Rc;

use serde_json::Value;

use crate::config::AppConfig;
use crate::net::api::{ApiError, AuthService, DataService, HttpAuthService, HttpDataService};
use crate::net::types::{Credentials, Registration, Role, User};
use crate::state::auth::{AuthState, SessionScope};
use crate::state::namespace::Namespace;
use crate::util::storage::{BrowserTier, StorageTier};

/// Keys that only UI events carry; a patch containing one was passed an event by mistake.
const EVENT_MARKERS: [&str; 2] = ["preventDefault", "nativeEvent"];

/// Fields only the store and the service may set.
const PROTECTED_FIELDS: [&str; 1] = ["role"];

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("profile update must be a JSON object, got {0}")]
    NotAnObject(&'static str),
    #[error("profile update looks like a UI event, not field data")]
    EventPayload,
    #[error("profile update may not set `{0}`")]
    ProtectedField(&'static str),
    #[error("profile update produced an invalid user record: {0}")]
    InvalidRecord(#[from] serde_json::Error),
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Collaborators injected into a [`SessionStore`].
pub struct SessionBackends {
    pub durable: Rc<dyn StorageTier>,
    pub ephemeral: Rc<dyn StorageTier>,
    pub auth: Rc<dyn AuthService>,
    pub data: Rc<dyn DataService>,
}

type Listener = Rc<dyn Fn(&AuthState)>;

struct Inner {
    state: AuthState,
    scope: Option<SessionScope>,
    /// Role the service last vouched for; a cached record never sets this.
    claimed_role: Role,
    namespace: Namespace,
    generation: u64,
    init_epoch: u64,
    listeners: Vec<Listener>,
}

/// Cheaply clonable handle to the shared session.
#[derive(Clone)]
pub struct SessionStore {
    inner: Rc<RefCell<Inner>>,
    backends: Rc<SessionBackends>,
    admin_email: Option<Rc<str>>,
}

impl SessionStore {
    /// Create a store for `namespace`. State starts as [`AuthState::pending`]
    /// until the first [`initialize`](Self::initialize) completes.
    pub fn new(backends: SessionBackends, namespace: Namespace, admin_email: Option<&str>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                state: AuthState::pending(),
                scope: None,
                claimed_role: Role::Member,
                namespace,
                generation: 0,
                init_epoch: 0,
                listeners: Vec::new(),
            })),
            backends: Rc::new(backends),
            admin_email: admin_email.map(Rc::from),
        }
    }

    /// Store backed by browser storage and the HTTP service at `config.api_base`.
    pub fn for_browser(config: &AppConfig, namespace: Namespace) -> Self {
        let backends = SessionBackends {
            durable: Rc::new(BrowserTier::durable()),
            ephemeral: Rc::new(BrowserTier::ephemeral()),
            auth: Rc::new(HttpAuthService::new(&config.api_base)),
            data: Rc::new(HttpDataService::new(&config.api_base)),
        };
        Self::new(backends, namespace, config.admin_email.as_deref())
    }

    pub fn state(&self) -> AuthState {
        self.inner.borrow().state.clone()
    }

    pub fn scope(&self) -> Option<SessionScope> {
        self.inner.borrow().scope
    }

    pub fn namespace(&self) -> Namespace {
        self.inner.borrow().namespace.clone()
    }

    /// Call `listener` with every state the store publishes from now on.
    pub fn subscribe(&self, listener: impl Fn(&AuthState) + 'static) {
        self.inner.borrow_mut().listeners.push(Rc::new(listener));
    }

    /// Replace the session with `user`, persisted durably when `remember` is set.
    pub fn login(&self, user: User, remember: bool) {
        let claimed = user.role;
        let user = self.admit(user, claimed);
        let scope = SessionScope::from_remember(remember);
        let key = self.storage_key();
        self.persist(scope, &key, &user);
        self.tier(other_scope(scope)).remove(&key);
        self.commit(|inner| {
            inner.generation += 1;
            inner.state.user = Some(user);
            inner.scope = Some(scope);
            inner.claimed_role = claimed;
        });
    }

    /// Invalidate the remote session, then clear every local trace of it.
    ///
    /// A remote failure is logged and otherwise ignored.
    pub async fn logout(&self) {
        self.commit(|inner| inner.generation += 1);
        if let Err(e) = self.backends.auth.logout().await {
            leptos::logging::warn!("logout: remote invalidation failed: {e}");
        }
        let key = self.storage_key();
        self.backends.durable.remove(&key);
        self.backends.ephemeral.remove(&key);
        self.commit(|inner| {
            inner.generation += 1;
            inner.state.user = None;
            inner.scope = None;
            inner.claimed_role = Role::Member;
        });
    }

    /// Shallow-merge `patch` into the current user and rewrite its tier.
    ///
    /// No-op without a signed-in user. The session never moves between tiers.
    ///
    /// # Errors
    ///
    /// Rejects, leaving state untouched, a `patch` that is not a JSON object,
    /// that looks like a UI event, that sets `role`, or that leaves an invalid
    /// user record.
    pub fn update_user(&self, patch: &Value) -> Result<(), SessionError> {
        let result = self.try_update_user(patch);
        if let Err(e) = &result {
            leptos::logging::warn!("update_user ignored: {e}");
        }
        result
    }

    fn try_update_user(&self, patch: &Value) -> Result<(), SessionError> {
        let Value::Object(fields) = patch else {
            return Err(SessionError::NotAnObject(json_kind(patch)));
        };
        if EVENT_MARKERS.iter().any(|marker| fields.contains_key(*marker)) {
            return Err(SessionError::EventPayload);
        }
        if let Some(field) = PROTECTED_FIELDS.into_iter().find(|field| fields.contains_key(*field)) {
            return Err(SessionError::ProtectedField(field));
        }
        let (current, scope, claimed) = {
            let inner = self.inner.borrow();
            (inner.state.user.clone(), inner.scope, inner.claimed_role)
        };
        let Some(current) = current else {
            return Ok(());
        };
        let merged = self.admit(current.merged(fields)?, claimed);
        if let Some(scope) = scope {
            self.persist(scope, &self.storage_key(), &merged);
        }
        self.commit(|inner| {
            inner.generation += 1;
            inner.state.user = Some(merged);
        });
        Ok(())
    }

    /// Authenticate with the service and start a session.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Api`] when the service rejects the credentials;
    /// the current session is left as it was.
    pub async fn sign_in(&self, credentials: &Credentials, remember: bool) -> Result<(), SessionError> {
        let user = self.backends.auth.login(credentials).await?;
        self.login(user, remember);
        Ok(())
    }

    /// Create an account with the service and start a session.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Api`] when registration fails.
    pub async fn register(&self, registration: &Registration, remember: bool) -> Result<(), SessionError> {
        let user = self.backends.auth.register(registration).await?;
        self.login(user, remember);
        Ok(())
    }

    /// Restore the session persisted for `namespace` and refresh it from the
    /// data service.
    ///
    /// The cached user is published before the refresh starts, as a member
    /// unless it is the sentinel account; only the refreshed profile can
    /// restore a service-granted admin role. A refreshed
    /// profile replaces it in memory and in the same tier; an unreadable cache
    /// or a failed refresh clears both tiers. `loading` is cleared when this
    /// pass finishes, whatever the path.
    pub async fn initialize(&self, namespace: Namespace) {
        let key = namespace.storage_key.clone();
        let (token, epoch) = self.commit(|inner| {
            inner.generation += 1;
            inner.init_epoch += 1;
            inner.namespace = namespace;
            inner.state = AuthState::pending();
            inner.scope = None;
            inner.claimed_role = Role::Member;
            (inner.generation, inner.init_epoch)
        });
        let _finish = LoadingGuard { store: self, epoch };

        let cached = self
            .backends
            .durable
            .get(&key)
            .map(|raw| (SessionScope::Durable, raw))
            .or_else(|| self.backends.ephemeral.get(&key).map(|raw| (SessionScope::Ephemeral, raw)));
        let Some((scope, raw)) = cached else {
            return;
        };

        let cached_user = match serde_json::from_str::<User>(&raw) {
            Ok(user) => self.admit(user, Role::Member),
            Err(e) => {
                leptos::logging::warn!("session: stored user under {key} is unreadable: {e}");
                self.discard(token, &key);
                return;
            }
        };
        let id = cached_user.id.clone();
        let applied = self.apply(token, |inner| {
            inner.state.user = Some(cached_user);
            inner.scope = Some(scope);
        });
        if !applied {
            return;
        }

        match self.backends.data.get_user(&id).await {
            Ok(Some(fresh)) => {
                let claimed = fresh.role;
                let fresh = self.admit(fresh, claimed);
                if self.is_current(token) {
                    self.persist(scope, &key, &fresh);
                    self.apply(token, |inner| {
                        inner.state.user = Some(fresh);
                        inner.claimed_role = claimed;
                    });
                }
            }
            Ok(None) => {
                leptos::logging::log!("session: no profile for {id}; keeping cached user");
            }
            Err(e) => {
                leptos::logging::warn!("session: profile refresh for {id} failed: {e}");
                self.discard(token, &key);
            }
        }
    }

    fn storage_key(&self) -> String {
        self.inner.borrow().namespace.storage_key.clone()
    }

    fn tier(&self, scope: SessionScope) -> &dyn StorageTier {
        match scope {
            SessionScope::Durable => self.backends.durable.as_ref(),
            SessionScope::Ephemeral => self.backends.ephemeral.as_ref(),
        }
    }

    fn persist(&self, scope: SessionScope, key: &str, user: &User) {
        match serde_json::to_string(user) {
            Ok(raw) => self.tier(scope).set(key, &raw),
            Err(e) => leptos::logging::warn!("session: cannot serialize user {}: {e}", user.id),
        }
    }

    /// Settle `user.role`: admin for the configured sentinel email or when the
    /// service vouched for it (`claimed`), member otherwise.
    fn admit(&self, mut user: User, claimed: Role) -> User {
        let is_sentinel = self
            .admin_email
            .as_deref()
            .is_some_and(|admin| admin.eq_ignore_ascii_case(user.email.trim()));
        user.role = if is_sentinel || claimed == Role::Admin { Role::Admin } else { Role::Member };
        user
    }

    fn is_current(&self, token: u64) -> bool {
        self.inner.borrow().generation == token
    }

    /// Commit `f` only if no newer pass or mutation superseded `token`.
    fn apply(&self, token: u64, f: impl FnOnce(&mut Inner)) -> bool {
        if !self.is_current(token) {
            return false;
        }
        self.commit(f);
        true
    }

    /// Drop a session that failed reconciliation.
    fn discard(&self, token: u64, key: &str) {
        if !self.is_current(token) {
            return;
        }
        self.backends.durable.remove(key);
        self.backends.ephemeral.remove(key);
        self.apply(token, |inner| {
            inner.state.user = None;
            inner.scope = None;
            inner.claimed_role = Role::Member;
        });
    }

    fn commit<R>(&self, f: impl FnOnce(&mut Inner) -> R) -> R {
        let (out, state, listeners) = {
            let mut inner = self.inner.borrow_mut();
            let out = f(&mut inner);
            (out, inner.state.clone(), inner.listeners.clone())
        };
        notify(&listeners, &state);
        out
    }
}

/// Clears `loading` when an initialization pass ends, including on early
/// return, panic or cancellation, unless a newer pass has started.
struct LoadingGuard<'a> {
    store: &'a SessionStore,
    epoch: u64,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        let Ok(mut inner) = self.store.inner.try_borrow_mut() else {
            return;
        };
        if inner.init_epoch != self.epoch {
            return;
        }
        inner.state.loading = false;
        let state = inner.state.clone();
        let listeners = inner.listeners.clone();
        drop(inner);
        notify(&listeners, &state);
    }
}

fn notify(listeners: &[Listener], state: &AuthState) {
    for listener in listeners {
        listener(state);
    }
}

fn other_scope(scope: SessionScope) -> SessionScope {
    match scope {
        SessionScope::Durable => SessionScope::Ephemeral,
        SessionScope::Ephemeral => SessionScope::Durable,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
