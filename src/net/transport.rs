//! Raw HTTP transport and navigation seams.
//!
//! Client-side (csr): real HTTP via `gloo-net` and hard navigation through
//! `window.location`. Elsewhere both are inert stubs so the pipeline above
//! them can be built and exercised natively.

use futures::future::LocalBoxFuture;

/// HTTP verbs the backend uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

/// A fully-built request, headers included.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// First value of header `name`, compared case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The request never produced a response.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Sends one request and yields the raw response.
pub trait Transport {
    fn send(&self, request: HttpRequest) -> LocalBoxFuture<'_, Result<HttpResponse, TransportError>>;
}

/// Performs a full page navigation, abandoning in-memory application state.
pub trait Navigator {
    fn hard_redirect(&self, path: &str);
}

/// `fetch`-backed transport.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    fn send(&self, request: HttpRequest) -> LocalBoxFuture<'_, Result<HttpResponse, TransportError>> {
        Box::pin(async move {
            #[cfg(feature = "csr")]
            {
                use gloo_net::http::RequestBuilder;

                let method = match request.method {
                    Method::Get => gloo_net::http::Method::GET,
                    Method::Post => gloo_net::http::Method::POST,
                    Method::Put => gloo_net::http::Method::PUT,
                    Method::Patch => gloo_net::http::Method::PATCH,
                    Method::Delete => gloo_net::http::Method::DELETE,
                };
                let mut builder = RequestBuilder::new(&request.url).method(method);
                for (key, value) in &request.headers {
                    builder = builder.header(key, value);
                }
                let resp = match request.body {
                    Some(body) => builder
                        .body(body)
                        .map_err(|e| TransportError(e.to_string()))?
                        .send()
                        .await,
                    None => builder.send().await,
                }
                .map_err(|e| TransportError(e.to_string()))?;
                let status = resp.status();
                let body = resp.text().await.map_err(|e| TransportError(e.to_string()))?;
                Ok(HttpResponse { status, body })
            }
            #[cfg(not(feature = "csr"))]
            {
                let _ = request;
                Err(TransportError("not available outside the browser".to_owned()))
            }
        })
    }
}

/// Navigates by assigning `window.location.href`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn hard_redirect(&self, path: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(path);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = path;
        }
    }
}
