//! Shared request pipeline every resource service routes through.
//!
//! SYSTEM CONTEXT
//! ==============
//! Request phase: whatever access token is stored right now is attached as a
//! bearer credential. Nothing is refreshed or validated up front.
//! Response phase: a 401 tears the session down and hard-redirects to the
//! login route before the caller sees `ApiError::AuthExpired`.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures and every other non-2xx status pass through unchanged.
//! There are no retries and no backoff.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use std::rc::Rc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::transport::{HttpRequest, HttpResponse, Method, Navigator, Transport};
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::session::state::Session;

/// What a 401 on this request means.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Unauthorized {
    /// The session is no longer valid: tear it down.
    Teardown,
    /// The submitted credentials were wrong; the session is not involved.
    Reject,
}

struct ClientInner {
    config: ClientConfig,
    transport: Rc<dyn Transport>,
    navigator: Rc<dyn Navigator>,
    session: Session,
}

/// Cloneable handle to the configured pipeline.
#[derive(Clone)]
pub struct ApiClient {
    inner: Rc<ClientInner>,
}

impl ApiClient {
    #[must_use]
    pub fn new(
        config: ClientConfig,
        transport: Rc<dyn Transport>,
        navigator: Rc<dyn Navigator>,
        session: Session,
    ) -> Self {
        Self { inner: Rc::new(ClientInner { config, transport, navigator, session }) }
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.inner.session
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// Send a request through the full pipeline and return the raw 2xx response.
    ///
    /// # Errors
    ///
    /// `Network` if no response arrived, `AuthExpired` on 401 (after teardown),
    /// `Status` for any other non-2xx.
    pub async fn send(&self, method: Method, path: &str, body: Option<String>) -> Result<HttpResponse, ApiError> {
        self.dispatch(method, path, body, Unauthorized::Teardown).await
    }

    /// Send a credential exchange (login, register). A 401 comes back as
    /// `Status` and leaves the current session untouched.
    pub(crate) async fn send_credentials<B: Serialize>(&self, path: &str, body: &B) -> Result<HttpResponse, ApiError> {
        let body = encode(body)?;
        self.dispatch(Method::Post, path, Some(body), Unauthorized::Reject).await
    }

    /// # Errors
    ///
    /// Pipeline errors from [`ApiClient::send`], or `Decode` for an unexpected body.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let resp = self.send(Method::Get, path, None).await?;
        decode(&resp)
    }

    /// # Errors
    ///
    /// Pipeline errors from [`ApiClient::send`], or `Decode` for an unexpected body.
    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let resp = self.send(Method::Post, path, Some(encode(body)?)).await?;
        decode(&resp)
    }

    /// # Errors
    ///
    /// Pipeline errors from [`ApiClient::send`], or `Decode` for an unexpected body.
    pub async fn put<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let resp = self.send(Method::Put, path, Some(encode(body)?)).await?;
        decode(&resp)
    }

    /// # Errors
    ///
    /// Pipeline errors from [`ApiClient::send`], or `Decode` for an unexpected body.
    pub async fn patch<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let resp = self.send(Method::Patch, path, Some(encode(body)?)).await?;
        decode(&resp)
    }

    /// POST with no body, ignoring whatever the server returns.
    ///
    /// # Errors
    ///
    /// Pipeline errors from [`ApiClient::send`].
    pub async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        self.send(Method::Post, path, None).await.map(|_| ())
    }

    /// # Errors
    ///
    /// Pipeline errors from [`ApiClient::send`].
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send(Method::Delete, path, None).await.map(|_| ())
    }

    fn build_request(&self, method: Method, path: &str, body: Option<String>) -> HttpRequest {
        let mut headers = vec![("Accept".to_owned(), "application/json".to_owned())];
        if body.is_some() {
            headers.push(("Content-Type".to_owned(), "application/json".to_owned()));
        }
        if let Some(token) = self.inner.session.access_token() {
            headers.push(("Authorization".to_owned(), format!("Bearer {token}")));
        }
        HttpRequest { method, url: self.inner.config.endpoint(path), headers, body }
    }

    async fn dispatch(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
        unauthorized: Unauthorized,
    ) -> Result<HttpResponse, ApiError> {
        let request = self.build_request(method, path, body);
        log::debug!("api: {} {}", method.as_str(), request.url);

        let resp = self.inner.transport.send(request).await.map_err(|e| {
            log::warn!("api: {} {path} failed: {e}", method.as_str());
            ApiError::Network(e.0)
        })?;

        if resp.is_success() {
            return Ok(resp);
        }
        if resp.status == 401 && unauthorized == Unauthorized::Teardown {
            if self.inner.session.force_teardown() {
                self.inner.navigator.hard_redirect(&self.inner.config.login_path);
            }
            return Err(ApiError::AuthExpired);
        }
        log::debug!("api: {} {path} returned {}", method.as_str(), resp.status);
        Err(ApiError::Status { status: resp.status, message: error_message(&resp.body) })
    }
}

fn encode<B: Serialize>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Decode(format!("request body: {e}")))
}

pub(crate) fn decode<T: DeserializeOwned>(resp: &HttpResponse) -> Result<T, ApiError> {
    serde_json::from_str(&resp.body).map_err(|e| {
        log::warn!("api: undecodable response body: {e}");
        ApiError::Decode(e.to_string())
    })
}

/// Pull a human-readable message out of an error body.
///
/// Understands `{"message": ..}`, `{"detail": ..}`, `{"error": ..}` and
/// field-error maps such as `{"email": ["already taken"]}`.
pub(crate) fn error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let object = value.as_object()?;
    for key in ["message", "detail", "error"] {
        if let Some(text) = object.get(key).and_then(serde_json::Value::as_str) {
            return Some(text.to_owned());
        }
    }
    object.iter().find_map(|(field, value)| {
        let text = match value {
            serde_json::Value::String(text) => text.as_str(),
            serde_json::Value::Array(items) => items.iter().find_map(serde_json::Value::as_str)?,
            _ => return None,
        };
        if field == "non_field_errors" {
            Some(text.to_owned())
        } else {
            Some(format!("{field}: {text}"))
        }
    })
}
