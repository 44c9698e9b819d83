//! Route guard for authenticated-only views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes apply identical gating: nothing renders until the session
//! has resolved, and an unauthenticated session is sent to the login route.
//! The guard is derived from the auth signal on every change, so a logout
//! anywhere revokes a protected view that is already on screen.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::session::state::AuthStatus;
use crate::state::auth::AuthState;

/// Rendering gate for a protected view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardState {
    /// Session status is still unknown.
    Pending,
    Allowed,
    /// Signed out; a redirect to login is due.
    Denied,
}

impl GuardState {
    #[must_use]
    pub fn from_status(status: AuthStatus) -> Self {
        match status {
            AuthStatus::Unknown => Self::Pending,
            AuthStatus::Authenticated => Self::Allowed,
            AuthStatus::Unauthenticated => Self::Denied,
        }
    }

    /// Only an allowed guard shows protected children.
    #[must_use]
    pub fn renders_children(self) -> bool {
        self == Self::Allowed
    }
}

/// Whether `state` calls for a redirect to the login route.
#[must_use]
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    GuardState::from_status(state.status) == GuardState::Denied
}

/// Navigate to `login_path` whenever the session resolves to signed-out.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, login_path: String, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = auth.get();
        if should_redirect_unauth(&state) {
            log::debug!("guard: signed out, redirecting to {login_path}");
            navigate(&login_path, NavigateOptions::default());
        }
    });
}
