//! Login, registration, refresh and logout flows.
//!
//! SYSTEM CONTEXT
//! ==============
//! The authoritative source of status and cached user for the rest of the
//! client. Forms call these operations; nothing outside the session module
//! writes credentials to storage.
//!
//! ERROR HANDLING
//! ==============
//! A failed login or registration leaves the prior session exactly as it was.
//! Concurrent logins are not serialized: the last response to arrive wins.

#[cfg(test)]
#[path = "manager_test.rs"]
mod manager_test;

use super::state::{AuthSnapshot, AuthStatus, Session, SubscriptionId};
use crate::error::{ApiError, AuthError};
use crate::net::client::{ApiClient, decode};
use crate::net::types::{AuthCredentials, AuthResponse, RefreshRequest, RefreshResponse, RegisterRequest, UserSummary};

/// Shortest password accepted at registration.
pub const MIN_PASSWORD_LEN: usize = 6;

const LOGIN_PATH: &str = "/auth/login/";
const REGISTER_PATH: &str = "/auth/register/";
const REFRESH_PATH: &str = "/auth/refresh/";

/// Reject a registration password before any request is made.
///
/// # Errors
///
/// `ValidationFailure` when `password` is shorter than [`MIN_PASSWORD_LEN`] characters.
pub fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AuthError::ValidationFailure(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    Ok(())
}

#[derive(Clone)]
pub struct SessionManager {
    client: ApiClient,
}

impl SessionManager {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    fn session(&self) -> &Session {
        self.client.session()
    }

    #[must_use]
    pub fn status(&self) -> AuthStatus {
        self.session().status()
    }

    #[must_use]
    pub fn snapshot(&self) -> AuthSnapshot {
        self.session().snapshot()
    }

    /// Cached user; never makes a request.
    #[must_use]
    pub fn current_user(&self) -> Option<UserSummary> {
        self.session().user()
    }

    /// Settle the startup status from storage. See [`Session::resolve_initial_status`].
    pub fn resolve_initial_status(&self) -> AuthStatus {
        self.session().resolve_initial_status()
    }

    pub fn subscribe(&self, listener: impl Fn(&AuthSnapshot) + 'static) -> SubscriptionId {
        self.session().subscribe(listener)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.session().unsubscribe(id);
    }

    /// Exchange credentials for a token pair and start a session.
    ///
    /// # Errors
    ///
    /// `InvalidCredentials` when the backend rejects the pair,
    /// `NetworkFailure` or `ServerError` otherwise.
    pub async fn login(&self, credentials: &AuthCredentials) -> Result<AuthSnapshot, AuthError> {
        let resp = self
            .client
            .send_credentials(LOGIN_PATH, credentials)
            .await
            .map_err(login_error)?;
        let tokens: AuthResponse = decode(&resp)?;
        self.start(tokens)
    }

    /// Create an account and start a session with the returned tokens.
    ///
    /// # Errors
    ///
    /// `ValidationFailure` for a short password (no request is sent) or a
    /// rejected payload, `Conflict` when the identity already exists,
    /// `NetworkFailure` or `ServerError` otherwise.
    pub async fn register(&self, data: &RegisterRequest) -> Result<AuthSnapshot, AuthError> {
        validate_password(&data.password)?;
        let resp = self
            .client
            .send_credentials(REGISTER_PATH, data)
            .await
            .map_err(register_error)?;
        let tokens: AuthResponse = decode(&resp)?;
        self.start(tokens)
    }

    /// Mint a new access token from the stored refresh token.
    ///
    /// # Errors
    ///
    /// `NoRefreshToken` when nothing is stored, `AuthExpired` when the backend
    /// rejects it (the session has been torn down by then), `NetworkFailure`
    /// or `ServerError` otherwise.
    pub async fn refresh(&self) -> Result<String, AuthError> {
        let refresh = self.session().refresh_token().ok_or(AuthError::NoRefreshToken)?;
        let resp: RefreshResponse = self.client.post(REFRESH_PATH, &RefreshRequest { refresh: &refresh }).await?;
        require_access_token(&resp.access)?;
        self.session().replace_access_token(&resp.access);
        log::info!("session: access token refreshed");
        Ok(resp.access)
    }

    /// Clear stored credentials. Safe to call when already signed out.
    pub fn logout(&self) {
        self.session().clear();
    }

    fn start(&self, tokens: AuthResponse) -> Result<AuthSnapshot, AuthError> {
        require_access_token(&tokens.access)?;
        self.session().establish(&tokens.access, &tokens.refresh, tokens.user);
        Ok(self.session().snapshot())
    }
}

/// A success response carrying an empty access token cannot start a session.
fn require_access_token(access: &str) -> Result<(), AuthError> {
    if access.is_empty() {
        log::warn!("session: backend returned an empty access token");
        return Err(AuthError::ServerError("response did not include an access token".to_owned()));
    }
    Ok(())
}

fn login_error(err: ApiError) -> AuthError {
    match err {
        ApiError::Status { status: 400 | 401, message } => {
            AuthError::InvalidCredentials(message.unwrap_or_else(|| "Invalid email or password".to_owned()))
        }
        other => other.into(),
    }
}

fn register_error(err: ApiError) -> AuthError {
    match err {
        ApiError::Status { status: 409, message } => {
            AuthError::Conflict(message.unwrap_or_else(|| "An account with these details already exists".to_owned()))
        }
        ApiError::Status { status: 400, message } => {
            let message = message.unwrap_or_else(|| "Failed to create account. Please try again.".to_owned());
            if reports_existing_identity(&message) {
                AuthError::Conflict(message)
            } else {
                AuthError::ValidationFailure(message)
            }
        }
        other => other.into(),
    }
}

fn reports_existing_identity(message: &str) -> bool {
    let lower = message.to_ascii_lowercase();
    lower.contains("already exists") || lower.contains("already taken") || lower.contains("already registered")
}
