//! Top navigation bar.
//!
//! Shows sign-in links to visitors and writing/profile links to signed-in
//! users. Logging out clears the session and returns to the feed.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::UserSummary;
use crate::services::use_services;
use crate::state::auth::AuthState;

/// Profile link for the signed-in user, or `None` while no user is cached.
fn profile_href(user: Option<&UserSummary>) -> Option<String> {
    user.filter(|u| !u.username.is_empty()).map(|u| format!("/profile/{}", u.username))
}

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let services = use_services();

    let profile_link = move || {
        let user = auth.get().user?;
        let href = profile_href(Some(&user))?;
        let name = user.display_name().to_owned();
        Some(view! {
            <a class="navbar__self" href=href>
                <span class="navbar__self-name">{name}</span>
                <span class="navbar__self-handle">"@" {user.username}</span>
            </a>
        })
    };

    view! {
        <nav class="navbar">
            <A href="/" attr:class="navbar__brand">
                "BlogSphere"
            </A>
            <span class="navbar__spacer"></span>
            <Show
                when=move || auth.get().is_authenticated()
                fallback=|| {
                    view! {
                        <A href="/login" attr:class="btn btn--ghost">
                            "Sign In"
                        </A>
                        <A href="/register" attr:class="btn">
                            "Get Started"
                        </A>
                    }
                }
            >
                <A href="/editor" attr:class="btn btn--ghost">
                    "Write"
                </A>
                <A href="/dashboard" attr:class="btn btn--ghost">
                    "Dashboard"
                </A>
                {profile_link}
                <a
                    class="btn navbar__logout"
                    href="/"
                    on:click=move |_| services.with_value(|s| s.session.logout())
                >
                    "Logout"
                </a>
            </Show>
        </nav>
    }
}
