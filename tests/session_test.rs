use httpmock::prelude::*;
use pythia_client::domain::model::User;
use pythia_client::{ClientConfig, Dimension, HttpApi, Store};
use serde_json::json;
use std::collections::HashMap;
use uuid::Uuid;

fn store_for(server: &MockServer) -> Store<HttpApi> {
    let config = ClientConfig {
        base_url: server.base_url(),
        max_concurrent_requests: 2,
        verbose: false,
    };
    Store::new(HttpApi::new(&config).unwrap())
}

fn test_user(email: &str) -> User {
    User {
        pk: Some(1),
        email: email.to_string(),
        first_name: String::new(),
        last_name: String::new(),
        extra: HashMap::new(),
    }
}

#[tokio::test]
async fn test_login_fetches_user_and_worksets() {
    let server = MockServer::start();
    let login = server.mock(|when, then| {
        when.method(POST)
            .path("/api/rest-auth/login/")
            .json_body(json!({"email": "user@example.com", "password": "secret"}));
        then.status(200)
            .header("Set-Cookie", "csrftoken=testtoken; Path=/")
            .json_body(json!({"key": "session"}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/rest-auth/user/");
        then.status(200)
            .json_body(json!({"pk": 1, "email": "user@example.com"}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/bookrank/workset/");
        then.status(200).json_body(json!([
            {"uuid": "11111111-1111-1111-1111-111111111111", "name": "Main", "mi_count": 4}
        ]));
    });

    let mut store = store_for(&server);
    store.login("user@example.com", "secret").await;

    login.assert();
    assert!(store.logged_in());
    assert!(!store.show_login_dialog());
    assert_eq!(store.username_text(), "user@example.com");
    assert_eq!(store.avatar_text(), "U");
    assert_eq!(store.worksets.len(), 1);
    assert!(store.selected_workset().is_some());
    assert!(store.session.login_error_text().is_none());
}

#[tokio::test]
async fn test_login_failure_surfaces_validation_message() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/rest-auth/login/");
        then.status(400).json_body(
            json!({"non_field_errors": ["Unable to log in with provided credentials."]}),
        );
    });

    let mut store = store_for(&server);
    store.login("user@example.com", "wrong").await;

    assert!(!store.logged_in());
    assert_eq!(
        store.session.login_error_text().as_deref(),
        Some("Unable to log in with provided credentials.")
    );
}

#[tokio::test]
async fn test_login_failure_without_validation_body() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/rest-auth/login/");
        then.status(400).json_body(json!({"detail": "nope"}));
    });

    let mut store = store_for(&server);
    store.login("user@example.com", "wrong").await;

    let text = store.session.login_error_text().unwrap();
    assert!(text.contains("400"));
}

#[tokio::test]
async fn test_retry_clears_previous_login_error() {
    let server = MockServer::start();
    let mut failing = server.mock(|when, then| {
        when.method(POST).path("/api/rest-auth/login/");
        then.status(400)
            .json_body(json!({"non_field_errors": ["Bad credentials"]}));
    });

    let mut store = store_for(&server);
    store.login("user@example.com", "wrong").await;
    assert!(store.session.login_error_text().is_some());

    failing.delete();
    server.mock(|when, then| {
        when.method(POST).path("/api/rest-auth/login/");
        then.status(200).json_body(json!({}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/rest-auth/user/");
        then.status(200).json_body(json!({"email": "user@example.com"}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/bookrank/workset/");
        then.status(200).json_body(json!([]));
    });
    store.login("user@example.com", "secret").await;

    assert!(store.session.login_error_text().is_none());
    assert!(store.logged_in());
}

#[tokio::test]
async fn test_logout_echoes_csrf_cookie_and_clears_user() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/rest-auth/login/");
        then.status(200)
            .header("Set-Cookie", "csrftoken=testtoken; Path=/")
            .json_body(json!({}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/rest-auth/user/");
        then.status(200).json_body(json!({"email": "user@example.com"}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/bookrank/workset/");
        then.status(200).json_body(json!([]));
    });
    let logout = server.mock(|when, then| {
        when.method(POST)
            .path("/api/rest-auth/logout/")
            .header("X-CSRFToken", "testtoken");
        then.status(200).json_body(json!({}));
    });

    let mut store = store_for(&server);
    store.login("user@example.com", "secret").await;
    assert!(store.logged_in());

    store.logout().await;

    logout.assert();
    assert!(!store.logged_in());
    assert!(store.show_login_dialog());
}

#[tokio::test]
async fn test_failed_logout_keeps_local_session() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/rest-auth/logout/");
        then.status(500);
    });

    let mut store = store_for(&server);
    store.user = Some(test_user("user@example.com"));

    store.logout().await;

    assert!(store.logged_in());
    let notification = store.notification().unwrap();
    assert!(notification.message.contains("Error logging out"));
}

#[tokio::test]
async fn test_4xx_on_authenticated_fetch_drops_local_user() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET)
            .path_contains("/api/hits/workhit/stats/");
        then.status(403);
    });

    let mut store = store_for(&server);
    store.user = Some(test_user("user@example.com"));

    let workset = Uuid::parse_str("11111111-1111-1111-1111-111111111111").unwrap();
    store.fetch_available(Dimension::Language, workset).await;

    assert!(!store.logged_in());
}

#[tokio::test]
async fn test_404_is_not_treated_as_session_expiry() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET)
            .path_contains("/api/hits/workhit/stats/");
        then.status(404);
    });

    let mut store = store_for(&server);
    store.user = Some(test_user("user@example.com"));

    let workset = Uuid::parse_str("11111111-1111-1111-1111-111111111111").unwrap();
    store.fetch_available(Dimension::Language, workset).await;

    assert!(store.logged_in());
}

#[tokio::test]
async fn test_shibboleth_mode_suppresses_logout() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/info/");
        then.status(200).json_body(json!({
            "VUFIND_URL": "https://vufind.example.com",
            "SUBJECT_SCHEMAS": ["psh"],
            "USE_SHIBBOLETH": true
        }));
    });

    let mut store = store_for(&server);
    store.start().await;

    assert!(!store.can_logout());
    assert_eq!(store.vufind_url(), "https://vufind.example.com");
}

#[tokio::test]
async fn test_failed_settings_load_raises_notification() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/info/");
        then.status(500);
    });

    let mut store = store_for(&server);
    store.start().await;

    let notification = store.notification().unwrap();
    assert!(notification
        .message
        .contains("Error loading basic server info"));
    assert!(store.can_logout());
}
