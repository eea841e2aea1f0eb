//! Restricted admin area; the only page the admin account can reach.

use leptos::prelude::*;

use crate::components::logout_button::LogoutButton;
use crate::state::auth::AuthState;

#[component]
pub fn AdminPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let email = move || auth.with(|state| state.user.as_ref().map(|u| u.email.clone())).unwrap_or_default();

    view! {
        <div class="admin-page">
            <header class="toolbar">
                <span class="toolbar__title">"nhau admin"</span>
                <span class="toolbar__self">{email}</span>
                <LogoutButton/>
            </header>
            <p class="admin-page__note">"Signed in with the administrative account."</p>
        </div>
    }
}
