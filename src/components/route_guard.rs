//! Route guards for member-only and sign-in pages.
//!
//! Both guards hold no state of their own: they evaluate
//! [`protected_decision`]/[`public_decision`] against the auth context and
//! either render, hold back, or navigate away.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::location::State;

use super::session_provider::ActiveNamespace;
use crate::state::auth::AuthState;
use crate::util::auth::{GuardDecision, protected_decision, public_decision};

/// Wraps content that requires a signed-in user.
///
/// Shows a placeholder until the session is reconciled, so a returning user is
/// never bounced to the login page first.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let active = expect_context::<ActiveNamespace>();
    let location = use_location();
    let navigate = use_navigate();

    let decision = Memo::new(move |_| {
        auth.with(|state| active.with(|namespace| protected_decision(state, namespace, &location.pathname.get())))
    });
    Effect::new(move || follow_redirect(&navigate, &decision.get()));

    move || match decision.get() {
        GuardDecision::Allow => children().into_any(),
        GuardDecision::Loading => view! {
            <div class="route-loading" aria-busy="true">
                <p>"Loading..."</p>
            </div>
        }
        .into_any(),
        _ => ().into_any(),
    }
}

/// Wraps the login and registration pages.
///
/// Renders nothing until the session is reconciled, then sends a signed-in
/// visitor away from the form.
#[component]
pub fn PublicRoute(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let active = expect_context::<ActiveNamespace>();
    let navigate = use_navigate();
    let origin = requested_origin();

    let decision = Memo::new(move |_| {
        auth.with(|state| active.with(|namespace| public_decision(state, namespace, origin.as_deref())))
    });
    Effect::new(move || follow_redirect(&navigate, &decision.get()));

    move || match decision.get() {
        GuardDecision::Allow => children().into_any(),
        _ => ().into_any(),
    }
}

fn follow_redirect(navigate: &impl Fn(&str, NavigateOptions), decision: &GuardDecision) {
    let Some(to) = decision.redirect_target() else {
        return;
    };
    let mut options = NavigateOptions { replace: true, ..NavigateOptions::default() };
    if let GuardDecision::RedirectToLogin { from, .. } = decision {
        options.state = origin_state(from);
    }
    navigate(to, options);
}

/// History state carrying the path a login redirect came from.
fn origin_state(from: &str) -> State {
    #[cfg(feature = "hydrate")]
    {
        State::new(Some(wasm_bindgen::JsValue::from_str(from)))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = from;
        State::new(None)
    }
}

/// Path stored by [`origin_state`] on the current history entry, if any.
fn requested_origin() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()?.history().ok()?.state().ok()?.as_string()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
