//! Error types for the request pipeline and the session layer.
//!
//! ERROR HANDLING
//! ==============
//! `ApiError` describes what happened to a single request and is passed to the
//! caller unchanged. `AuthError` is the taxonomy the login/register/refresh
//! flows surface to forms. Only `AuthExpired` carries a global side effect, and
//! that effect has already run by the time the caller sees the error.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of one request routed through the shared pipeline.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("session expired, please sign in again")]
    AuthExpired,
    #[error("request failed with status {status}{}", message_suffix(.message))]
    Status { status: u16, message: Option<String> },
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("{0} are not available yet")]
    Unavailable(&'static str),
}

impl ApiError {
    /// HTTP status carried by the error, if the server answered at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::AuthExpired => Some(401),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    #[must_use]
    pub fn is_server_error(&self) -> bool {
        self.status().is_some_and(|s| s >= 500)
    }

    /// Server-provided message for a rejected request.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

fn message_suffix(message: &Option<String>) -> String {
    message.as_deref().map(|m| format!(": {m}")).unwrap_or_default()
}

/// Failure of a session operation, shown inline by the auth forms.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("{0}")]
    InvalidCredentials(String),
    #[error("{0}")]
    ValidationFailure(String),
    #[error("{0}")]
    Conflict(String),
    #[error("session expired, please sign in again")]
    AuthExpired,
    #[error("network error: {0}")]
    NetworkFailure(String),
    #[error("server error: {0}")]
    ServerError(String),
    #[error("no refresh token available")]
    NoRefreshToken,
}

impl From<ApiError> for AuthError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Network(msg) => Self::NetworkFailure(msg),
            ApiError::AuthExpired => Self::AuthExpired,
            other => Self::ServerError(other.to_string()),
        }
    }
}
