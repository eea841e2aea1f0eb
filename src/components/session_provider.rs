//! Provides auth state, the session store and the active namespace.
//!
//! SYSTEM CONTEXT
//! ==============
//! Must sit inside `<Router>`. Resolves the namespace from the location once
//! per navigation and re-runs session initialization whenever it changes,
//! since each namespace holds its own session.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::config::AppConfig;
use crate::state::auth::AuthState;
use crate::state::namespace::Namespace;
use crate::state::session::SessionStore;

/// Context handle for the session store.
pub type SessionHandle = StoredValue<SessionStore, LocalStorage>;

/// Context handle for the namespace of the current location.
pub type ActiveNamespace = Memo<Namespace>;

#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let location = use_location();

    let namespace_config = config.clone();
    let active: ActiveNamespace = Memo::new(move |_| namespace_config.namespace_for(&location.pathname.get()));

    let auth = RwSignal::new(AuthState::pending());
    let store = SessionStore::for_browser(&config, active.get_untracked());
    store.subscribe(move |state| auth.set(state.clone()));
    let session: SessionHandle = StoredValue::new_local(store);

    provide_context(auth);
    provide_context(session);
    provide_context(active);

    Effect::new(move || {
        let namespace = active.get();
        #[cfg(feature = "hydrate")]
        {
            let store = session.get_value();
            leptos::task::spawn_local(async move { store.initialize(namespace).await });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (namespace, session);
        }
    });

    children()
}
