//! Logout button shared by the member and admin pages.

use leptos::prelude::*;

use super::session_provider::SessionHandle;

/// Ends the session; the route guard then redirects to the login page.
#[component]
pub fn LogoutButton() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let busy = RwSignal::new(false);

    let on_logout = move |_| {
        if busy.get() {
            return;
        }
        busy.set(true);
        #[cfg(feature = "hydrate")]
        {
            let store = session.get_value();
            leptos::task::spawn_local(async move {
                store.logout().await;
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = session;
        }
    };

    view! {
        <button class="btn toolbar__logout" on:click=on_logout disabled=move || busy.get() title="Logout">
            "Logout"
        </button>
    }
}
