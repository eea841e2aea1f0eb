//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment, WildcardSegment,
    components::{Route, Router, Routes},
    hooks::use_location,
};

use crate::components::route_guard::{ProtectedRoute, PublicRoute};
use crate::components::session_provider::{ActiveNamespace, SessionProvider};
use crate::config::AppConfig;
use crate::pages::{admin::AdminPage, home::HomePage, login::LoginPage, register::RegisterPage};
use crate::state::namespace::Screen;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides config, then the session contexts inside the router. Every path
/// goes to [`NamespacedScreen`], which picks the page relative to the active
/// namespace so configured prefixes need no route table changes.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(AppConfig::load());

    view! {
        <Stylesheet id="leptos" href="/pkg/nhau.css"/>
        <Title text="nhau"/>

        <Router>
            <SessionProvider>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=NamespacedScreen/>
                    <Route path=WildcardSegment("any") view=NamespacedScreen/>
                </Routes>
            </SessionProvider>
        </Router>
    }
}

/// Guarded page for the current path within the active namespace.
#[component]
fn NamespacedScreen() -> impl IntoView {
    let active = expect_context::<ActiveNamespace>();
    let location = use_location();
    let screen = Memo::new(move |_| active.with(|namespace| namespace.screen_for(&location.pathname.get())));

    move || match screen.get() {
        Some(Screen::Home) => view! { <ProtectedRoute><HomePage/></ProtectedRoute> }.into_any(),
        Some(Screen::Admin) => view! { <ProtectedRoute><AdminPage/></ProtectedRoute> }.into_any(),
        Some(Screen::Login) => view! { <PublicRoute><LoginPage/></PublicRoute> }.into_any(),
        Some(Screen::Register) => view! { <PublicRoute><RegisterPage/></PublicRoute> }.into_any(),
        None => view! {
            <ProtectedRoute>
                <p class="not-found">"Page not found."</p>
            </ProtectedRoute>
        }
        .into_any(),
    }
}
