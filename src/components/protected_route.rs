//! Wrapper that gates authenticated-only pages.
//!
//! DESIGN
//! ======
//! Children render only while the guard is `Allowed`. The fallback covers both
//! the pending window at startup and the moment between sign-out and the
//! redirect landing.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::services::use_services;
use crate::state::auth::AuthState;
use crate::util::auth::{GuardState, install_unauth_redirect};

#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let login_path = use_services().with_value(|services| services.client.config().login_path.clone());
    install_unauth_redirect(auth, login_path, use_navigate());

    let guard = Memo::new(move |_| GuardState::from_status(auth.get().status));

    view! {
        <Show
            when=move || guard.get().renders_children()
            fallback=move || {
                view! {
                    <div class="guard">
                        <p>
                            {move || {
                                if guard.get() == GuardState::Pending {
                                    "Loading..."
                                } else {
                                    "Redirecting to login..."
                                }
                            }}
                        </p>
                    </div>
                }
            }
        >
            {children()}
        </Show>
    }
}
