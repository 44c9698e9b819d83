use super::*;

#[test]
fn memory_store_put_overwrites() {
    let store = MemoryStore::new();
    store.put(ACCESS_TOKEN_KEY, "T1");
    store.put(ACCESS_TOKEN_KEY, "T2");
    assert_eq!(store.get(ACCESS_TOKEN_KEY).as_deref(), Some("T2"));
    assert_eq!(store.len(), 1);
}

#[test]
fn memory_store_get_missing_is_none() {
    let store = MemoryStore::new();
    assert_eq!(store.get(REFRESH_TOKEN_KEY), None);
}

#[test]
fn clear_removes_every_session_key() {
    let store = MemoryStore::new();
    store.put(ACCESS_TOKEN_KEY, "T1");
    store.put(REFRESH_TOKEN_KEY, "R1");
    store.put(USER_KEY, "{}");
    store.put("theme", "dark");

    store.clear(&SESSION_KEYS);

    for key in SESSION_KEYS {
        assert_eq!(store.get(key), None, "{key} should be cleared");
    }
    assert_eq!(store.get("theme").as_deref(), Some("dark"));
}

#[test]
fn clear_on_empty_store_is_noop() {
    let store = MemoryStore::new();
    store.clear(&SESSION_KEYS);
    assert!(store.is_empty());
}

#[cfg(not(feature = "csr"))]
#[test]
fn browser_store_is_inert_outside_the_browser() {
    let store = BrowserStore;
    store.put(ACCESS_TOKEN_KEY, "T1");
    assert_eq!(store.get(ACCESS_TOKEN_KEY), None);
    store.clear(&SESSION_KEYS);
}
