//! Durable key-value storage for session credentials.
//!
//! SYSTEM CONTEXT
//! ==============
//! In the browser this is origin-scoped `localStorage`: it survives reloads
//! and is readable by any script on the origin, so it is not a security
//! boundary. Reads never fail; an unavailable store looks empty.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::RefCell;
use std::collections::HashMap;

/// Key holding the bearer access token.
pub const ACCESS_TOKEN_KEY: &str = "auth_token";
/// Key holding the refresh token.
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";
/// Key holding the JSON-serialized cached user.
pub const USER_KEY: &str = "user";

/// Every key the session owns. Teardown always clears all of them.
pub const SESSION_KEYS: [&str; 3] = [ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, USER_KEY];

/// Storage backend for tokens and the cached user record.
pub trait TokenStore {
    /// Overwrite `key` with `value`.
    fn put(&self, key: &str, value: &str);

    /// Read `key`, or `None` if unset or the store is unavailable.
    fn get(&self, key: &str) -> Option<String>;

    fn remove(&self, key: &str);

    /// Remove every key in `keys` before returning.
    fn clear(&self, keys: &[&str]) {
        for key in keys {
            self.remove(key);
        }
    }
}

/// In-process store used outside the browser and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl TokenStore for MemoryStore {
    fn put(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// `window.localStorage` for the current origin.
///
/// Without the `csr` feature every read is absent and every write is a no-op.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl TokenStore for BrowserStore {
    fn put(&self, key: &str, value: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = local_storage() else {
                log::warn!("storage: localStorage unavailable, dropping write to {key}");
                return;
            };
            if storage.set_item(key, value).is_err() {
                log::warn!("storage: write to {key} rejected");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
        }
    }

    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
        }
    }
}
