use futures::executor::block_on;
use serde_json::json;

use super::*;
use crate::net::transport::Method;
use crate::session::store::{ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, TokenStore, USER_KEY};
use crate::test_support::{Fixture, make_user, url, yield_now};

fn credentials() -> AuthCredentials {
    AuthCredentials { email: "a@b.com".to_owned(), password: "secret1".to_owned() }
}

fn registration(password: &str) -> RegisterRequest {
    RegisterRequest { email: "a@b.com".to_owned(), username: "ada".to_owned(), password: password.to_owned() }
}

// =============================================================
// login
// =============================================================

#[test]
fn login_persists_tokens_and_authenticates() {
    let fx = Fixture::new();
    fx.session().resolve_initial_status();
    fx.transport.reply(200, json!({"access": "T1", "refresh": "R1"}));

    let snapshot = block_on(fx.services.session.login(&credentials())).unwrap();

    assert_eq!(snapshot.status, AuthStatus::Authenticated);
    assert_eq!(fx.store.get(ACCESS_TOKEN_KEY).as_deref(), Some("T1"));
    assert_eq!(fx.store.get(REFRESH_TOKEN_KEY).as_deref(), Some("R1"));

    let req = fx.transport.last_request();
    assert_eq!(req.method, Method::Post);
    assert_eq!(req.url, url("/auth/login/"));
    assert_eq!(
        serde_json::from_str::<serde_json::Value>(req.body.as_deref().unwrap()).unwrap(),
        json!({"email": "a@b.com", "password": "secret1"})
    );
}

#[test]
fn login_then_request_carries_new_token() {
    let fx = Fixture::new();
    fx.transport.reply(200, json!({"access": "T1", "refresh": "R1"}));
    fx.transport.reply(200, json!([]));

    block_on(fx.services.session.login(&credentials())).unwrap();
    block_on(fx.services.articles.list()).unwrap();

    let req = fx.transport.last_request();
    assert_eq!(req.url, url("/articles/"));
    assert_eq!(req.header("Authorization"), Some("Bearer T1"));
}

#[test]
fn login_with_user_overwrites_cached_user() {
    let fx = Fixture::new();
    fx.session().establish("T0", "R0", Some(make_user("u0", "old")));
    fx.transport.reply(
        200,
        json!({"access": "T1", "refresh": "R1", "user": {"id": 1, "username": "ada", "email": "a@b.com"}}),
    );

    block_on(fx.services.session.login(&credentials())).unwrap();

    let user = fx.services.session.current_user().unwrap();
    assert_eq!(user.id, "1");
    assert_eq!(user.username, "ada");
    assert!(fx.store.get(USER_KEY).unwrap().contains("\"ada\""));
}

#[test]
fn login_without_user_leaves_cached_user() {
    let fx = Fixture::new();
    fx.session().establish("T0", "R0", Some(make_user("u0", "prior")));
    fx.transport.reply(200, json!({"access": "T1", "refresh": "R1"}));

    block_on(fx.services.session.login(&credentials())).unwrap();

    assert_eq!(fx.services.session.current_user().map(|u| u.username), Some("prior".to_owned()));
}

#[test]
fn login_rejected_is_invalid_credentials_and_state_untouched() {
    let fx = Fixture::new();
    fx.session().establish("T0", "R0", Some(make_user("u0", "prior")));
    fx.transport.reply(401, json!({"detail": "No active account found with the given credentials"}));

    let err = block_on(fx.services.session.login(&credentials())).unwrap_err();

    assert_eq!(
        err,
        AuthError::InvalidCredentials("No active account found with the given credentials".to_owned())
    );
    assert_eq!(fx.services.session.status(), AuthStatus::Authenticated);
    assert_eq!(fx.store.get(ACCESS_TOKEN_KEY).as_deref(), Some("T0"));
    assert!(fx.navigator.visits().is_empty());
}

#[test]
fn login_rejected_without_message_uses_default() {
    let fx = Fixture::new();
    fx.transport.reply_empty(400);

    let err = block_on(fx.services.session.login(&credentials())).unwrap_err();

    assert_eq!(err.to_string(), "Invalid email or password");
}

#[test]
fn login_network_failure_leaves_state_untouched() {
    let fx = Fixture::new();
    fx.session().resolve_initial_status();
    fx.transport.fail("offline");

    let err = block_on(fx.services.session.login(&credentials())).unwrap_err();

    assert_eq!(err, AuthError::NetworkFailure("offline".to_owned()));
    assert_eq!(fx.services.session.status(), AuthStatus::Unauthenticated);
    assert!(fx.store.is_empty());
}

#[test]
fn login_server_error() {
    let fx = Fixture::new();
    fx.transport.reply(502, json!({}));

    let err = block_on(fx.services.session.login(&credentials())).unwrap_err();

    assert!(matches!(err, AuthError::ServerError(_)));
    assert!(fx.store.is_empty());
}

#[test]
fn login_response_without_tokens_is_server_error() {
    let fx = Fixture::new();
    fx.transport.reply(200, json!({"ok": true}));

    let err = block_on(fx.services.session.login(&credentials())).unwrap_err();

    assert!(matches!(err, AuthError::ServerError(_)));
    assert_eq!(fx.services.session.status(), AuthStatus::Unknown);
}

#[test]
fn login_with_empty_access_token_is_server_error() {
    let fx = Fixture::new();
    fx.session().resolve_initial_status();
    fx.transport.reply(200, json!({"access": "", "refresh": "R1"}));

    let err = block_on(fx.services.session.login(&credentials())).unwrap_err();

    assert!(matches!(err, AuthError::ServerError(_)));
    assert_eq!(fx.services.session.status(), AuthStatus::Unauthenticated);
    assert!(fx.store.is_empty());
}

#[test]
fn register_with_empty_access_token_is_server_error() {
    let fx = Fixture::new();
    fx.transport.reply(201, json!({"access": "", "refresh": "R1"}));

    let err = block_on(fx.services.session.register(&registration("secret1"))).unwrap_err();

    assert!(matches!(err, AuthError::ServerError(_)));
    assert!(fx.store.is_empty());
}

#[test]
fn last_concurrent_login_wins() {
    let fx = Fixture::new();
    fx.transport.hold_replies();
    let first = credentials();
    let second = AuthCredentials { email: "b@c.com".to_owned(), password: "secret2".to_owned() };

    let (a, b, ()) = block_on(async {
        futures::join!(fx.services.session.login(&first), fx.services.session.login(&second), async {
            assert_eq!(fx.transport.in_flight(), 2);
            // The second login's response arrives first.
            fx.transport.release_newest(200, json!({"access": "TB", "refresh": "RB"}));
            yield_now().await;
            fx.transport.release_oldest(200, json!({"access": "TA", "refresh": "RA"}));
        })
    });

    assert!(a.is_ok() && b.is_ok());
    assert_eq!(fx.store.get(ACCESS_TOKEN_KEY).as_deref(), Some("TA"));
    assert_eq!(fx.store.get(REFRESH_TOKEN_KEY).as_deref(), Some("RA"));
}

// =============================================================
// register
// =============================================================

#[test]
fn register_short_password_sends_nothing() {
    let fx = Fixture::new();

    let err = block_on(fx.services.session.register(&registration("abc"))).unwrap_err();

    assert_eq!(err, AuthError::ValidationFailure("Password must be at least 6 characters".to_owned()));
    assert_eq!(fx.transport.request_count(), 0);
}

#[test]
fn register_five_chars_is_too_short() {
    assert!(validate_password("abcde").is_err());
    assert!(validate_password("abcdef").is_ok());
    assert!(validate_password("éééééé").is_ok());
}

#[test]
fn register_success_starts_session() {
    let fx = Fixture::new();
    fx.transport.reply(201, json!({"access": "T1", "refresh": "R1", "user": {"id": "u1", "username": "ada"}}));

    let snapshot = block_on(fx.services.session.register(&registration("secret1"))).unwrap();

    assert_eq!(snapshot.status, AuthStatus::Authenticated);
    assert_eq!(snapshot.user.map(|u| u.username), Some("ada".to_owned()));
    assert_eq!(fx.transport.last_request().url, url("/auth/register/"));
}

#[test]
fn register_conflict_status() {
    let fx = Fixture::new();
    fx.transport.reply(409, json!({"detail": "Username taken"}));

    let err = block_on(fx.services.session.register(&registration("secret1"))).unwrap_err();

    assert_eq!(err, AuthError::Conflict("Username taken".to_owned()));
}

#[test]
fn register_existing_identity_field_error_is_conflict() {
    let fx = Fixture::new();
    fx.transport.reply(400, json!({"username": ["A user with that username already exists."]}));

    let err = block_on(fx.services.session.register(&registration("secret1"))).unwrap_err();

    assert_eq!(err, AuthError::Conflict("username: A user with that username already exists.".to_owned()));
}

#[test]
fn register_other_bad_request_is_validation_failure() {
    let fx = Fixture::new();
    fx.transport.reply(400, json!({"email": ["Enter a valid email address."]}));

    let err = block_on(fx.services.session.register(&registration("secret1"))).unwrap_err();

    assert_eq!(err, AuthError::ValidationFailure("email: Enter a valid email address.".to_owned()));
    assert_eq!(fx.services.session.status(), AuthStatus::Unknown);
}

// =============================================================
// refresh
// =============================================================

#[test]
fn refresh_without_token_fails() {
    let fx = Fixture::new();

    let err = block_on(fx.services.session.refresh()).unwrap_err();

    assert_eq!(err, AuthError::NoRefreshToken);
    assert_eq!(fx.transport.request_count(), 0);
}

#[test]
fn refresh_stores_new_access_token_only() {
    let fx = Fixture::new();
    fx.session().establish("T1", "R1", None);
    fx.transport.reply(200, json!({"access": "T2"}));

    let token = block_on(fx.services.session.refresh()).unwrap();

    assert_eq!(token, "T2");
    assert_eq!(fx.store.get(ACCESS_TOKEN_KEY).as_deref(), Some("T2"));
    assert_eq!(fx.store.get(REFRESH_TOKEN_KEY).as_deref(), Some("R1"));
    let req = fx.transport.last_request();
    assert_eq!(req.url, url("/auth/refresh/"));
    assert_eq!(req.body.as_deref(), Some(r#"{"refresh":"R1"}"#));
}

#[test]
fn refresh_with_empty_access_token_keeps_old_token() {
    let fx = Fixture::new();
    fx.session().establish("T1", "R1", None);
    fx.transport.reply(200, json!({"access": ""}));

    let err = block_on(fx.services.session.refresh()).unwrap_err();

    assert!(matches!(err, AuthError::ServerError(_)));
    assert_eq!(fx.store.get(ACCESS_TOKEN_KEY).as_deref(), Some("T1"));
    assert_eq!(fx.services.session.status(), AuthStatus::Authenticated);
}

#[test]
fn refresh_rejected_tears_down() {
    let fx = Fixture::new();
    fx.session().establish("T1", "R1", None);
    fx.transport.reply(401, json!({"detail": "Token is blacklisted"}));

    let err = block_on(fx.services.session.refresh()).unwrap_err();

    assert_eq!(err, AuthError::AuthExpired);
    assert!(fx.store.is_empty());
    assert_eq!(fx.navigator.visits(), vec!["/login".to_owned()]);
}

// =============================================================
// logout / resolve
// =============================================================

#[test]
fn logout_twice_is_fine() {
    let fx = Fixture::new();
    fx.session().establish("T1", "R1", Some(make_user("u1", "ada")));

    fx.services.session.logout();
    fx.services.session.logout();

    assert_eq!(fx.services.session.status(), AuthStatus::Unauthenticated);
    assert!(fx.services.session.current_user().is_none());
    assert!(fx.store.is_empty());
}

#[test]
fn resolve_ignores_lone_refresh_token() {
    let fx = Fixture::new();
    fx.store.put(REFRESH_TOKEN_KEY, "R1");

    assert_eq!(fx.services.session.resolve_initial_status(), AuthStatus::Unauthenticated);
    assert_eq!(fx.transport.request_count(), 0);
}

#[test]
fn stale_token_is_trusted_until_first_rejection() {
    let fx = Fixture::new();
    fx.store.put(ACCESS_TOKEN_KEY, "T1");
    assert_eq!(fx.services.session.resolve_initial_status(), AuthStatus::Authenticated);

    fx.transport.reply(401, json!({}));
    let result = block_on(fx.services.articles.list());

    assert_eq!(result, Err(ApiError::AuthExpired));
    assert_eq!(fx.services.session.status(), AuthStatus::Unauthenticated);
    assert!(fx.store.is_empty());
    assert_eq!(fx.navigator.visits(), vec!["/login".to_owned()]);
}
