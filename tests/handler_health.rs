mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use std::sync::Arc;
use tinylink::routes::router;

#[tokio::test]
async fn test_health_endpoint_success() {
    let server = common::test_server();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["storage"]["status"], "ok");
    assert!(json.get("version").is_some());
}

#[tokio::test]
async fn test_health_endpoint_degraded() {
    let state = common::state_with(Arc::new(common::UnavailableRepository));
    let server = TestServer::new(router(state)).unwrap();

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["storage"]["status"], "error");
    assert!(json["checks"]["storage"]["message"].is_string());
}

#[tokio::test]
async fn test_storage_failure_is_internal_error() {
    let state = common::state_with(Arc::new(common::UnavailableRepository));
    let server = TestServer::new(router(state)).unwrap();

    let response = server.get("/abc123").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "internal_error");
}

#[tokio::test]
async fn test_root_lists_endpoints() {
    let server = common::test_server();

    let response = server.get("/").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["message"], "URL Shortener API");
    assert!(json["endpoints"].get("POST /shorten").is_some());
}
