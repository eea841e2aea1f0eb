//! Member landing page: greeting, display-name edit and logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered only behind `ProtectedRoute`, so a user is always present here
//! apart from the frame between logout and the guard's redirect.

use leptos::prelude::*;

use crate::components::logout_button::LogoutButton;
use crate::components::session_provider::SessionHandle;
use crate::state::auth::AuthState;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<SessionHandle>();
    let draft_name = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let greeting = move || {
        auth.with(|state| state.user.as_ref().map(|u| u.display_name().to_owned()))
            .unwrap_or_default()
    };

    let on_rename = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let name = draft_name.get().trim().to_owned();
        if name.is_empty() {
            info.set("Enter a display name.".to_owned());
            return;
        }
        let patch = serde_json::json!({ "name": name });
        match session.with_value(|store| store.update_user(&patch)) {
            Ok(()) => {
                draft_name.set(String::new());
                info.set("Display name updated.".to_owned());
            }
            Err(e) => info.set(format!("Update failed: {e}")),
        }
    };

    view! {
        <div class="home-page">
            <header class="toolbar">
                <span class="toolbar__title">"nhau"</span>
                <span class="toolbar__self">{greeting}</span>
                <LogoutButton/>
            </header>
            <section class="home-page__profile">
                <h2>"Profile"</h2>
                <form class="profile-form" on:submit=on_rename>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="New display name"
                        prop:value=move || draft_name.get()
                        on:input=move |ev| draft_name.set(event_target_value(&ev))
                    />
                    <button class="btn" type="submit">"Save"</button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="home-page__message">{move || info.get()}</p>
                </Show>
            </section>
        </div>
    }
}
