//! Service bundle shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `ApiClient` (and so one `Session`) backs every service. The bundle holds
//! `Rc`s, so it lives in a thread-local `StoredValue`; components receive the
//! `Copy` handle and can capture it in view closures and event handlers.

#[cfg(test)]
#[path = "services_test.rs"]
mod services_test;

use std::rc::Rc;

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::net::articles::ArticlesApi;
use crate::net::client::ApiClient;
use crate::net::comments::CommentsApi;
use crate::net::transport::{BrowserNavigator, BrowserTransport, Navigator, Transport};
use crate::net::users::UsersApi;
use crate::session::manager::SessionManager;
use crate::session::state::Session;
use crate::session::store::{BrowserStore, TokenStore};

#[derive(Clone)]
pub struct Services {
    pub client: ApiClient,
    pub session: SessionManager,
    pub articles: ArticlesApi,
    pub users: UsersApi,
    pub comments: CommentsApi,
}

impl Services {
    #[must_use]
    pub fn new(
        config: ClientConfig,
        store: Rc<dyn TokenStore>,
        transport: Rc<dyn Transport>,
        navigator: Rc<dyn Navigator>,
    ) -> Self {
        let client = ApiClient::new(config, transport, navigator, Session::new(store));
        Self {
            session: SessionManager::new(client.clone()),
            articles: ArticlesApi::new(client.clone()),
            users: UsersApi::new(client.clone()),
            comments: CommentsApi,
            client,
        }
    }

    /// Services over `localStorage`, `fetch` and `window.location`.
    #[must_use]
    pub fn browser(config: ClientConfig) -> Self {
        Self::new(config, Rc::new(BrowserStore), Rc::new(BrowserTransport), Rc::new(BrowserNavigator))
    }
}

/// Context handle to the shared [`Services`].
pub type ServicesHandle = StoredValue<Services, LocalStorage>;

/// Make `services` available to every component below the caller.
pub fn provide_services(services: Services) -> ServicesHandle {
    let handle = StoredValue::new_local(services);
    provide_context(handle);
    handle
}

/// Fetch the handle installed by [`provide_services`].
///
/// # Panics
///
/// Panics if called outside the component tree rooted at `App`.
pub fn use_services() -> ServicesHandle {
    expect_context::<ServicesHandle>()
}
