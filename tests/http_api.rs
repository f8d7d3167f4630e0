//! End-to-end tests for the HTTP front end.

use std::time::Duration;

use reqwest::StatusCode;
use serde_json::{json, Value};

mod common;

use common::{config_with, spawn_server};

#[tokio::test]
async fn test_get_integer_resolves_to_retrieve() {
    let server = spawn_server(config_with("/api/v1", true)).await;

    let res = server
        .client
        .get(server.url("/api/v1/Accounts/Users/42?expand=roles"))
        .send()
        .await
        .expect("router unreachable");

    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.headers().contains_key("x-request-id"));

    let body: Value = res.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "command": "accounts/users",
            "action": "retrieve",
            "context_id": {"kind": "integer", "value": "42"},
            "payload": {"expand": "roles"}
        })
    );
    server.shutdown.trigger();
}

#[tokio::test]
async fn test_post_create_merges_payload() {
    let server = spawn_server(config_with("", false)).await;

    let res = server
        .client
        .post(server.url("/accounts/users?source=query&invite=1"))
        .json(&json!({"source": "body", "email": "a@example.com"}))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["command"], "accounts/users");
    assert_eq!(body["action"], "create");
    assert_eq!(body["context_id"], json!({"kind": "none"}));
    assert_eq!(
        body["payload"],
        json!({"source": "body", "invite": "1", "email": "a@example.com"})
    );
    server.shutdown.trigger();
}

#[tokio::test]
async fn test_custom_action_with_uuid() {
    let server = spawn_server(config_with("", true)).await;
    let uuid = "550e8400-e29b-41d4-a716-446655440000";

    let res = server
        .client
        .put(server.url(&format!("/accounts/users/suspend/{}", uuid)))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["command"], "accounts/users");
    assert_eq!(body["action"], "suspend");
    assert_eq!(body["context_id"], json!({"kind": "uuid", "value": uuid}));
    server.shutdown.trigger();
}

#[tokio::test]
async fn test_unmatched_request_is_not_found() {
    let server = spawn_server(config_with("", false)).await;

    let res = server
        .client
        .delete(server.url("/accounts/users"))
        .header("x-request-id", "req-123")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(res.headers()["x-request-id"], "req-123");
    let body: Value = res.json().await.unwrap();
    assert_eq!(
        body,
        json!({"error": "Invalid delete request", "request_id": "req-123"})
    );
    server.shutdown.trigger();
}

#[tokio::test]
async fn test_unknown_method_is_not_found() {
    let server = spawn_server(config_with("", true)).await;

    let res = server
        .client
        .patch(server.url("/accounts/users/42"))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "Invalid patch request");
    server.shutdown.trigger();
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let server = spawn_server(config_with("", true)).await;

    let res = server
        .client
        .post(server.url("/accounts/users/import"))
        .body("[1, 2, 3]")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "JSON body must be an object");
    server.shutdown.trigger();
}

#[tokio::test]
async fn test_root_uses_default_entry_point() {
    let server = spawn_server(config_with("/api/v1", false)).await;

    let res = server.client.get(server.url("/")).send().await.unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["command"], "index/index");
    assert_eq!(body["action"], "index");
    server.shutdown.trigger();
}

#[tokio::test]
async fn test_reload_swaps_prefix_and_rules() {
    let server = spawn_server(config_with("/api/v1", true)).await;

    let res = server
        .client
        .post(server.url("/api/v2/accounts/users"))
        .send()
        .await
        .unwrap();
    // `/api/v2/...` is four segments with no id: nothing matches.
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    server.updates.send(config_with("/api/v2", false)).unwrap();
    tokio::time::sleep(Duration::from_millis(200)).await;

    let res = server
        .client
        .post(server.url("/api/v2/accounts/users"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["command"], "accounts/users");
    assert_eq!(body["action"], "create");
    server.shutdown.trigger();
}
