//! Process-wide authentication state with single-writer discipline.
//!
//! SYSTEM CONTEXT
//! ==============
//! `Session` is the only code that writes the token store. The request pipeline
//! reads tokens from it and calls `force_teardown` on 401; `SessionManager`
//! drives login/register/refresh/logout through it; the UI subscribes to it.
//!
//! DESIGN
//! ======
//! Status starts `Unknown` and is resolved once from storage. Presence of an
//! access token is trusted without asking the backend, so a stale token stays
//! "authenticated" until the first request it is rejected on.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::store::{ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, SESSION_KEYS, TokenStore, USER_KEY};
use crate::net::types::UserSummary;

/// Resolved authentication status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthStatus {
    /// Storage has not been read yet.
    #[default]
    Unknown,
    Authenticated,
    Unauthenticated,
}

/// What listeners observe after every change.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthSnapshot {
    pub status: AuthStatus,
    pub user: Option<UserSummary>,
}

/// Handle returned by [`Session::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Rc<dyn Fn(&AuthSnapshot)>;

#[derive(Default)]
struct SessionState {
    snapshot: AuthSnapshot,
    resolved: bool,
    /// Set by the first forced teardown, cleared when a session is established.
    torn_down: bool,
}

struct SessionInner {
    store: Rc<dyn TokenStore>,
    state: RefCell<SessionState>,
    listeners: RefCell<Vec<(SubscriptionId, Listener)>>,
    next_listener: Cell<u64>,
}

/// Shared handle to the session. Clones observe and mutate the same state.
#[derive(Clone)]
pub struct Session {
    inner: Rc<SessionInner>,
}

impl Session {
    #[must_use]
    pub fn new(store: Rc<dyn TokenStore>) -> Self {
        Self {
            inner: Rc::new(SessionInner {
                store,
                state: RefCell::new(SessionState::default()),
                listeners: RefCell::new(Vec::new()),
                next_listener: Cell::new(0),
            }),
        }
    }

    #[must_use]
    pub fn status(&self) -> AuthStatus {
        self.inner.state.borrow().snapshot.status
    }

    /// Cached user. Never touches the network.
    #[must_use]
    pub fn user(&self) -> Option<UserSummary> {
        self.inner.state.borrow().snapshot.user.clone()
    }

    #[must_use]
    pub fn snapshot(&self) -> AuthSnapshot {
        self.inner.state.borrow().snapshot.clone()
    }

    /// Access token currently in storage, expired or not.
    #[must_use]
    pub fn access_token(&self) -> Option<String> {
        self.stored_token(ACCESS_TOKEN_KEY)
    }

    #[must_use]
    pub fn refresh_token(&self) -> Option<String> {
        self.stored_token(REFRESH_TOKEN_KEY)
    }

    /// Read storage and settle `Unknown` into a definite status.
    ///
    /// Runs once; later calls return the current status unchanged.
    pub fn resolve_initial_status(&self) -> AuthStatus {
        if self.inner.state.borrow().resolved {
            return self.status();
        }
        let authenticated = self.access_token().is_some();
        let user = if authenticated { self.load_cached_user() } else { None };
        self.transition(|state| {
            state.resolved = true;
            state.snapshot.status = if authenticated {
                AuthStatus::Authenticated
            } else {
                AuthStatus::Unauthenticated
            };
            state.snapshot.user = user;
        });
        log::debug!("session: initial status {:?}", self.status());
        self.status()
    }

    /// Persist a fresh token pair and mark the session authenticated.
    ///
    /// A provided user overwrites the cached one; `None` leaves the cache as is.
    pub(crate) fn establish(&self, access: &str, refresh: &str, user: Option<UserSummary>) {
        self.inner.store.put(ACCESS_TOKEN_KEY, access);
        self.inner.store.put(REFRESH_TOKEN_KEY, refresh);
        if let Some(user) = &user {
            self.persist_user(user);
        }
        self.transition(|state| {
            state.resolved = true;
            state.torn_down = false;
            state.snapshot.status = AuthStatus::Authenticated;
            if user.is_some() {
                state.snapshot.user = user;
            }
        });
        log::info!("session: authenticated");
    }

    /// Store a new access token from a refresh. The refresh token is kept.
    pub(crate) fn replace_access_token(&self, access: &str) {
        self.inner.store.put(ACCESS_TOKEN_KEY, access);
        self.transition(|state| {
            state.resolved = true;
            state.torn_down = false;
            state.snapshot.status = AuthStatus::Authenticated;
        });
    }

    /// Overwrite the cached user wholesale.
    pub(crate) fn replace_user(&self, user: UserSummary) {
        self.persist_user(&user);
        self.transition(|state| state.snapshot.user = Some(user));
    }

    /// Explicit logout. Safe to call repeatedly.
    pub(crate) fn clear(&self) {
        self.inner.store.clear(&SESSION_KEYS);
        self.transition(|state| {
            state.resolved = true;
            state.snapshot = AuthSnapshot { status: AuthStatus::Unauthenticated, user: None };
        });
        log::info!("session: logged out");
    }

    /// Teardown after an authentication failure.
    ///
    /// Returns `true` only for the first teardown since the last established
    /// session, which is the one that should navigate to login.
    pub(crate) fn force_teardown(&self) -> bool {
        self.inner.store.clear(&SESSION_KEYS);
        let first = !self.inner.state.borrow().torn_down;
        self.transition(|state| {
            state.resolved = true;
            state.torn_down = true;
            state.snapshot = AuthSnapshot { status: AuthStatus::Unauthenticated, user: None };
        });
        if first {
            log::warn!("session: rejected with 401, forcing teardown");
        }
        first
    }

    /// Call `listener` after every change to status or cached user.
    pub fn subscribe(&self, listener: impl Fn(&AuthSnapshot) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.inner.next_listener.get());
        self.inner.next_listener.set(id.0 + 1);
        self.inner.listeners.borrow_mut().push((id, Rc::new(listener)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.inner.listeners.borrow_mut().retain(|(existing, _)| *existing != id);
    }

    /// An empty stored token counts as absent.
    fn stored_token(&self, key: &str) -> Option<String> {
        self.inner.store.get(key).filter(|token| !token.is_empty())
    }

    fn load_cached_user(&self) -> Option<UserSummary> {
        let raw = self.inner.store.get(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                log::warn!("session: ignoring unreadable cached user: {e}");
                None
            }
        }
    }

    fn persist_user(&self, user: &UserSummary) {
        match serde_json::to_string(user) {
            Ok(raw) => self.inner.store.put(USER_KEY, &raw),
            Err(e) => log::warn!("session: failed to serialize user: {e}"),
        }
    }

    /// Apply `update` and notify listeners if the snapshot changed.
    ///
    /// Listeners run after the state borrow is released so they may read the
    /// session again.
    fn transition(&self, update: impl FnOnce(&mut SessionState)) {
        let changed = {
            let mut state = self.inner.state.borrow_mut();
            let before = state.snapshot.clone();
            update(&mut state);
            (state.snapshot != before).then(|| state.snapshot.clone())
        };
        let Some(snapshot) = changed else {
            return;
        };
        let listeners: Vec<Listener> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in listeners {
            listener(&snapshot);
        }
    }
}
