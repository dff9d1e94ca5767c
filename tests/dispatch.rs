//! End-to-end dispatch tests against an HTTP double.
//!
//! Each test builds a real registry over a `CloudClient` pointed at a
//! local mock API, then drives calls through `ToolRegistry::dispatch`
//! exactly as the stdio transport would.

use hcloud_mcp::client::CloudClient;
use hcloud_mcp::tools::{self, filter_catalog, AccessMode, ToolRegistry};
use hcloud_mcp::types::ApiConfig;
use serde_json::{json, Value};
use std::sync::Arc;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn registry_for(endpoint: &str, mode: AccessMode) -> ToolRegistry {
    let client = Arc::new(
        CloudClient::new(&ApiConfig {
            endpoint: endpoint.to_string(),
            token: "test-token".to_string(),
            ..ApiConfig::default()
        })
        .unwrap(),
    );
    ToolRegistry::bind(filter_catalog(tools::full_catalog(&client), mode)).unwrap()
}

fn ssh_key_json(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "fingerprint": "b7:2f:30:a0:2f:6c:58:6c:21:04:58:61:ba:06:3b:2f",
        "public_key": "ssh-ed25519 AAAAC3NzaC1lZDI1NTE5AAAA",
        "labels": {},
        "created": "2024-01-15T10:00:00+00:00"
    })
}

#[tokio::test]
async fn read_only_registry_hides_mutating_tools() {
    let read_only = registry_for("http://localhost:0", AccessMode::ReadOnly);
    let read_write = registry_for("http://localhost:0", AccessMode::ReadWrite);

    assert!(read_only.get("get_all_ssh_keys").is_some());
    assert!(read_only.get("create_a_ssh_key").is_none());
    assert!(read_only.get("update_a_ssh_key").is_none());
    assert!(read_only.get("delete_ssh_key_by_id").is_none());
    assert!(read_only.get("create_a_firewall").is_none());

    assert!(read_write.get("create_a_ssh_key").is_some());
    assert!(read_write.len() > read_only.len());
}

#[tokio::test]
async fn list_tools_returns_pretty_payload() {
    let api = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ssh_keys"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"ssh_keys": [ssh_key_json(1, "deploy")]})),
        )
        .mount(&api)
        .await;

    let registry = registry_for(&api.uri(), AccessMode::ReadOnly);
    let result = registry
        .dispatch("get_all_ssh_keys", json!({}))
        .await
        .unwrap();

    assert_ne!(result.is_error, Some(true));
    let text = result.content[0].as_text().unwrap();
    assert!(text.contains("\"name\": \"deploy\""), "got: {text}");
    // Pretty-printed, 2-space indent.
    assert!(text.starts_with("[\n  {"), "got: {text}");
}

#[tokio::test]
async fn name_lookup_goes_through_the_name_filter() {
    let api = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ssh_keys"))
        .and(query_param("name", "deploy"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"ssh_keys": [ssh_key_json(7, "deploy")]})),
        )
        .expect(1)
        .mount(&api)
        .await;

    let registry = registry_for(&api.uri(), AccessMode::ReadOnly);
    let result = registry
        .dispatch("get_a_ssh_key_by_id_or_name", json!({"id_or_name": "deploy"}))
        .await
        .unwrap();

    assert_ne!(result.is_error, Some(true));
    let payload: Value =
        serde_json::from_str(result.content[0].as_text().unwrap()).unwrap();
    assert_eq!(payload["id"], 7);
}

#[tokio::test]
async fn missing_resource_reads_as_null() {
    let api = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ssh_keys/99"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&api)
        .await;

    let registry = registry_for(&api.uri(), AccessMode::ReadOnly);
    let result = registry
        .dispatch("get_a_ssh_key_by_id_or_name", json!({"id_or_name": "99"}))
        .await
        .unwrap();

    assert_ne!(result.is_error, Some(true));
    assert_eq!(result.content[0].as_text(), Some("null"));
}

#[tokio::test]
async fn update_of_missing_key_never_issues_a_write() {
    let api = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ssh_keys/42"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&api)
        .await;
    // The lookup fails, so no PUT may ever reach the API.
    Mock::given(method("PUT"))
        .and(path("/ssh_keys/42"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&api)
        .await;

    let registry = registry_for(&api.uri(), AccessMode::ReadWrite);
    let result = registry
        .dispatch(
            "update_a_ssh_key",
            json!({"ssh_key_id": 42, "name": "renamed"}),
        )
        .await
        .unwrap();

    assert_eq!(result.is_error, Some(true));
    let text = result.content[0].as_text().unwrap();
    assert!(text.contains("not found"), "got: {text}");
}

#[tokio::test]
async fn delete_of_missing_key_never_issues_a_write() {
    let api = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ssh_keys/13"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&api)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/ssh_keys/13"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&api)
        .await;

    let registry = registry_for(&api.uri(), AccessMode::ReadWrite);
    let result = registry
        .dispatch("delete_ssh_key_by_id", json!({"ssh_key_id": 13}))
        .await
        .unwrap();

    assert_eq!(result.is_error, Some(true));
}

#[tokio::test]
async fn delete_returns_the_removed_key() {
    let api = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ssh_keys/5"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"ssh_key": ssh_key_json(5, "old")})),
        )
        .mount(&api)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/ssh_keys/5"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&api)
        .await;

    let registry = registry_for(&api.uri(), AccessMode::ReadWrite);
    let result = registry
        .dispatch("delete_ssh_key_by_id", json!({"ssh_key_id": 5}))
        .await
        .unwrap();

    assert_ne!(result.is_error, Some(true));
    let payload: Value =
        serde_json::from_str(result.content[0].as_text().unwrap()).unwrap();
    assert_eq!(payload["name"], "old");
}

#[tokio::test]
async fn firewall_create_sends_only_valid_ranges_and_targets() {
    let api = MockServer::start().await;
    let expected_body = json!({
        "name": "web",
        "rules": [{
            "direction": "in",
            "source_ips": ["10.0.0.0/24"],
            "destination_ips": [],
            "protocol": "tcp",
            "port": "80"
        }],
        "apply_to": [
            {"type": "server", "server": {"id": 7}}
        ]
    });
    Mock::given(method("POST"))
        .and(path("/firewalls"))
        .and(body_json(&expected_body))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "firewall": {"id": 99, "name": "web"},
            "actions": []
        })))
        .expect(1)
        .mount(&api)
        .await;

    let registry = registry_for(&api.uri(), AccessMode::ReadWrite);
    let result = registry
        .dispatch(
            "create_a_firewall",
            json!({
                "name": "web",
                "rules": [{
                    "direction": "in",
                    "source_ips": [
                        {"ip": "10.0.0.0", "mask": "////AA=="},
                        {"ip": "not-an-ip", "mask": "////AA=="}
                    ],
                    "protocol": "tcp",
                    "port": "80"
                }],
                "apply_to": [
                    {"type": "server", "server": {"id": 7}},
                    {"type": "volume"}
                ]
            }),
        )
        .await
        .unwrap();

    assert_ne!(result.is_error, Some(true));
    let payload: Value =
        serde_json::from_str(result.content[0].as_text().unwrap()).unwrap();
    assert_eq!(payload["firewall"]["id"], 99);
}

#[tokio::test]
async fn api_errors_surface_as_tool_failures() {
    let api = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ssh_keys"))
        .respond_with(ResponseTemplate::new(423).set_body_json(json!({
            "error": {"code": "locked", "message": "the project is locked"}
        })))
        .mount(&api)
        .await;

    let registry = registry_for(&api.uri(), AccessMode::ReadOnly);
    let result = registry
        .dispatch("get_all_ssh_keys", json!({}))
        .await
        .unwrap();

    assert_eq!(result.is_error, Some(true));
    let text = result.content[0].as_text().unwrap();
    assert!(text.contains("locked"), "got: {text}");
}

#[tokio::test]
async fn bad_arguments_fail_without_touching_the_api() {
    let api = MockServer::start().await;
    // No mocks mounted: any request would 404 and the mock server would
    // record it; we assert zero received requests instead.
    let registry = registry_for(&api.uri(), AccessMode::ReadWrite);
    let result = registry
        .dispatch("update_a_ssh_key", json!({"ssh_key_id": "not-a-number"}))
        .await
        .unwrap();

    assert_eq!(result.is_error, Some(true));
    assert!(api.received_requests().await.unwrap().is_empty());
}
