mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn test_redirect_success() {
    let server = common::test_server();
    let created = common::shorten(&server, "https://www.example.com").await;
    let code = created["short_code"].as_str().unwrap();

    let response = server.get(&format!("/{code}")).await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(
        response.header("location").to_str().unwrap(),
        "https://www.example.com/"
    );
}

#[tokio::test]
async fn test_redirect_not_found() {
    let server = common::test_server();

    let response = server.get("/nonexistent").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["message"], "Short URL not found");
}

#[tokio::test]
async fn test_redirect_is_case_sensitive() {
    let server = common::test_server();
    let created = common::shorten(&server, "https://www.example.com").await;
    let code = created["short_code"].as_str().unwrap();

    let flipped: String = code
        .chars()
        .map(|c| {
            if c.is_ascii_uppercase() {
                c.to_ascii_lowercase()
            } else {
                c.to_ascii_uppercase()
            }
        })
        .collect();

    if flipped != code {
        server
            .get(&format!("/{flipped}"))
            .await
            .assert_status_not_found();
    }
}

#[tokio::test]
async fn test_each_redirect_counts_once() {
    let server = common::test_server();
    let created = common::shorten(&server, "https://www.example.com").await;
    let code = created["short_code"].as_str().unwrap();

    for _ in 0..3 {
        server
            .get(&format!("/{code}"))
            .await
            .assert_status(StatusCode::FOUND);
    }

    let stats = server
        .get(&format!("/stats/{code}"))
        .await
        .json::<serde_json::Value>();
    assert_eq!(stats["click_count"], 3);
}

#[tokio::test]
async fn test_unknown_code_counts_nothing() {
    let server = common::test_server();
    let created = common::shorten(&server, "https://www.example.com").await;
    let code = created["short_code"].as_str().unwrap();

    server.get("/zzzzzzzzzz").await.assert_status_not_found();

    let stats = server
        .get(&format!("/stats/{code}"))
        .await
        .json::<serde_json::Value>();
    assert_eq!(stats["click_count"], 0);
}
