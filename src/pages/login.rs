//! Sign-in page: email + password with an optional "remember me".

use leptos::prelude::*;

use crate::components::session_provider::{ActiveNamespace, SessionHandle};
use crate::net::types::Credentials;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let active = expect_context::<ActiveNamespace>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let remember = RwSignal::new(true);
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = Credentials { email: email.get().trim().to_owned(), password: password.get() };
        if credentials.email.is_empty() || credentials.password.is_empty() {
            info.set("Enter your email and password.".to_owned());
            return;
        }
        busy.set(true);
        info.set("Signing in...".to_owned());
        let remember_me = remember.get();

        #[cfg(feature = "hydrate")]
        {
            let store = session.get_value();
            leptos::task::spawn_local(async move {
                if let Err(e) = store.sign_in(&credentials, remember_me).await {
                    info.set(format!("Sign-in failed: {e}"));
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (session, credentials, remember_me);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"nhau"</h1>
                <p class="login-card__subtitle">"Sign in"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <label class="login-remember">
                        <input
                            type="checkbox"
                            prop:checked=move || remember.get()
                            on:change=move |ev| remember.set(event_target_checked(&ev))
                        />
                        "Remember me"
                    </label>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <a class="login-link" href=move || active.get().register_path()>
                    "Create an account"
                </a>
            </div>
        </div>
    }
}
