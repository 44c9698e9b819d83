//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::config::ClientConfig;
use crate::pages::{
    article::ArticlePage, dashboard::DashboardPage, editor::EditorPage, home::HomePage, login::LoginPage,
    profile::ProfilePage, register::RegisterPage,
};
use crate::services::{Services, provide_services};
use crate::state::auth::AuthState;

/// Root application component.
///
/// Wires the browser-backed services, mirrors the session into the shared
/// `AuthState` signal, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let services = Services::browser(ClientConfig::from_env());
    let auth = RwSignal::new(AuthState::default());

    // Subscribe before resolving so the resolution itself reaches the signal.
    let subscription = services.session.subscribe(move |snapshot| {
        auth.try_set(AuthState::from(snapshot));
    });
    services.session.resolve_initial_status();

    let services = provide_services(services);
    provide_context(auth);
    on_cleanup(move || {
        services.try_with_value(|s| s.session.unsubscribe(subscription));
    });

    view! {
        <Title text="BlogSphere" />

        <Router>
            <Navbar />
            <main class="page">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage />
                    <Route path=(StaticSegment("article"), ParamSegment("id")) view=ArticlePage />
                    <Route path=StaticSegment("login") view=LoginPage />
                    <Route path=StaticSegment("register") view=RegisterPage />
                    <Route path=StaticSegment("dashboard") view=DashboardPage />
                    <Route path=StaticSegment("editor") view=EditorPage />
                    <Route path=(StaticSegment("profile"), ParamSegment("username")) view=ProfilePage />
                </Routes>
            </main>
        </Router>
    }
}
