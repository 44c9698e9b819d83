//! Client configuration resolved at build time.
//!
//! DESIGN
//! ======
//! A WASM bundle has no process environment, so overrides are read with
//! `option_env!` when the crate is compiled rather than at startup.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Backend REST base URL used when no override is compiled in.
pub const DEFAULT_API_BASE_URL: &str = "https://g1-jeemecode-blogspher-1.onrender.com/api";

/// Route that receives the hard redirect after an authentication failure.
pub const DEFAULT_LOGIN_PATH: &str = "/login";

/// Settings shared by the request pipeline and the session layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL every endpoint path is appended to, without a trailing slash.
    pub api_base_url: String,
    /// Path navigated to when a request is rejected with 401.
    pub login_path: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_API_BASE_URL)
    }
}

impl ClientConfig {
    /// Build a config for `base_url`, trimming any trailing slashes.
    #[must_use]
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            api_base_url: base_url.trim_end_matches('/').to_owned(),
            login_path: DEFAULT_LOGIN_PATH.to_owned(),
        }
    }

    /// Load from `BLOGSPHERE_API_URL` captured at compile time, falling back to
    /// [`DEFAULT_API_BASE_URL`].
    #[must_use]
    pub fn from_env() -> Self {
        match option_env!("BLOGSPHERE_API_URL") {
            Some(url) if !url.trim().is_empty() => Self::with_base_url(url.trim()),
            _ => Self::default(),
        }
    }

    /// Absolute URL for an endpoint path such as `/articles/`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.api_base_url)
        } else {
            format!("{}/{path}", self.api_base_url)
        }
    }
}
