mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn test_list_empty() {
    let server = common::test_server();

    let response = server.get("/api/urls").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["count"], 0);
    assert!(json["urls"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_list_pages_in_creation_order() {
    let server = common::test_server();

    let mut codes = Vec::new();
    for i in 0..5 {
        let created = common::shorten(&server, &format!("https://example.com/{i}")).await;
        codes.push(created["short_code"].as_str().unwrap().to_string());
    }

    let mut seen = Vec::new();
    for skip in [0, 2, 4] {
        let json = server
            .get(&format!("/api/urls?skip={skip}&limit=2"))
            .await
            .json::<serde_json::Value>();

        for url in json["urls"].as_array().unwrap() {
            seen.push(url["short_code"].as_str().unwrap().to_string());
        }
    }

    assert_eq!(seen, codes);
}

#[tokio::test]
async fn test_list_accepts_offset_alias() {
    let server = common::test_server();
    for i in 0..3 {
        common::shorten(&server, &format!("https://example.com/{i}")).await;
    }

    let json = server
        .get("/api/urls?offset=1&limit=10")
        .await
        .json::<serde_json::Value>();

    assert_eq!(json["count"], 2);
    assert_eq!(json["urls"][0]["original_url"], "https://example.com/1");
}

#[tokio::test]
async fn test_list_past_the_end_is_empty() {
    let server = common::test_server();
    common::shorten(&server, "https://example.com").await;

    let json = server
        .get("/api/urls?skip=10")
        .await
        .json::<serde_json::Value>();

    assert_eq!(json["count"], 0);
}

#[tokio::test]
async fn test_list_rejects_invalid_window() {
    let server = common::test_server();

    server
        .get("/api/urls?limit=0")
        .await
        .assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    server
        .get("/api/urls?limit=1001")
        .await
        .assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    server
        .get("/api/urls?skip=-1")
        .await
        .assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_list_non_numeric_limit_uses_error_envelope() {
    let server = common::test_server();

    let response = server.get("/api/urls?limit=ten").await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(json["error"]["message"], "Invalid query parameters");
}
