//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mirrors the session's snapshot into a reactive signal. Used by the route
//! guard and user-aware components to coordinate login redirects and
//! identity-dependent rendering.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::UserSummary;
use crate::session::state::{AuthSnapshot, AuthStatus};

/// Authentication state tracking the current user and resolution status.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub status: AuthStatus,
    pub user: Option<UserSummary>,
}

impl AuthState {
    /// Startup resolution has not finished yet.
    #[must_use]
    pub fn loading(&self) -> bool {
        self.status == AuthStatus::Unknown
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.status == AuthStatus::Authenticated
    }
}

impl From<&AuthSnapshot> for AuthState {
    fn from(snapshot: &AuthSnapshot) -> Self {
        Self { status: snapshot.status, user: snapshot.user.clone() }
    }
}
