use httpmock::prelude::*;
use pythia_client::{ClientConfig, Dimension, HttpApi, Severity, Store};
use serde_json::json;
use uuid::Uuid;

const WORKSET: &str = "11111111-1111-1111-1111-111111111111";

fn store_for(server: &MockServer) -> Store<HttpApi> {
    let config = ClientConfig {
        base_url: server.base_url(),
        max_concurrent_requests: 2,
        verbose: false,
    };
    Store::new(HttpApi::new(&config).unwrap())
}

fn workset() -> Uuid {
    Uuid::parse_str(WORKSET).unwrap()
}

#[tokio::test]
async fn test_language_options_are_uppercased_with_dash_fallback() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET)
            .path(format!("/api/hits/workhit/stats/{}/lang", WORKSET));
        then.status(200).json_body(json!([
            {"name": "cs", "score": 120, "work_count": 10},
            {"name": "en", "score": 80, "work_count": 7},
            {"name": "", "score": 3, "work_count": 1},
        ]));
    });

    let mut store = store_for(&server);
    store.fetch_available(Dimension::Language, workset()).await;

    let labels: Vec<&str> = store
        .language
        .available
        .iter()
        .map(|opt| opt.label.as_str())
        .collect();
    let values: Vec<&str> = store
        .language
        .available
        .iter()
        .map(|opt| opt.value.as_str())
        .collect();
    assert_eq!(labels, vec!["CS", "EN", "-"]);
    assert_eq!(values, vec!["cs", "en", ""]);
    assert!(store.notification().is_none());
}

#[tokio::test]
async fn test_institution_options_use_pk_values() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(format!(
            "/api/hits/workhit/stats/{}/owner_institution",
            WORKSET
        ));
        then.status(200).json_body(json!([
            {"pk": 4, "name": "Municipal library", "score": 50},
            {"pk": 9, "name": "", "score": 2},
        ]));
    });

    let mut store = store_for(&server);
    store
        .fetch_available(Dimension::OwnerInstitution, workset())
        .await;

    assert_eq!(store.owner.available.len(), 2);
    assert_eq!(store.owner.available[0].value, 4);
    assert_eq!(store.owner.available[0].label, "MUNICIPAL LIBRARY");
    assert_eq!(store.owner.available[1].label, "-");
}

#[tokio::test]
async fn test_work_type_labels_keep_their_casing() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET)
            .path(format!("/api/hits/workhit/stats/{}/work_category", WORKSET));
        then.status(200)
            .json_body(json!([{"pk": 2, "name": "Beletrie", "score": 11}]));
    });

    let mut store = store_for(&server);
    store
        .fetch_available(Dimension::WorkCategory, workset())
        .await;

    assert_eq!(store.work_type.available[0].label, "Beletrie");
}

#[tokio::test]
async fn test_failed_fetch_leaves_filter_untouched_and_notifies() {
    let server = MockServer::start();
    let mut success = server.mock(|when, then| {
        when.method(GET)
            .path(format!("/api/hits/workhit/stats/{}/lang", WORKSET));
        then.status(200)
            .json_body(json!([{"name": "cs", "score": 120}]));
    });

    let mut store = store_for(&server);
    store.fetch_available(Dimension::Language, workset()).await;
    store.language.select(Some("cs".to_string()));

    success.delete();
    server.mock(|when, then| {
        when.method(GET)
            .path(format!("/api/hits/workhit/stats/{}/lang", WORKSET));
        then.status(500);
    });
    store.fetch_available(Dimension::Language, workset()).await;

    assert_eq!(store.language.available.len(), 1);
    assert_eq!(store.language.selected.as_deref(), Some("cs"));

    let notification = store.notification().expect("a notification is raised");
    assert!(notification.message.contains("Error obtaining list of languages"));
    assert_eq!(notification.severity, Severity::Error);
}

#[tokio::test]
async fn test_dismissed_notification_is_hidden_until_replaced() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET)
            .path(format!("/api/hits/workhit/stats/{}/lang", WORKSET));
        then.status(500);
    });

    let mut store = store_for(&server);
    store.fetch_available(Dimension::Language, workset()).await;
    assert!(store.notification().is_some());

    store.dismiss_notification();
    assert!(store.notification().is_none());

    // a second failure replaces the pending message and shows it again
    store.fetch_available(Dimension::Language, workset()).await;
    assert!(store.notification().is_some());
}
