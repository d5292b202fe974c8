mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn test_stats_after_one_redirect() {
    let server = common::test_server();
    let created = common::shorten(&server, "https://www.google.com").await;
    let code = created["short_code"].as_str().unwrap();

    server
        .get(&format!("/{code}"))
        .await
        .assert_status(StatusCode::FOUND);

    let response = server.get(&format!("/stats/{code}")).await;
    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["click_count"], 1);
    assert_eq!(json["short_code"], code);
    assert_eq!(json["original_url"], "https://www.google.com/");
    assert_eq!(json["id"], created["id"]);
    assert_eq!(json["created_at"], created["created_at"]);
}

#[tokio::test]
async fn test_stats_does_not_count_clicks() {
    let server = common::test_server();
    let created = common::shorten(&server, "https://www.example.com").await;
    let code = created["short_code"].as_str().unwrap();

    for _ in 0..3 {
        server.get(&format!("/stats/{code}")).await.assert_status_ok();
    }

    let json = server
        .get(&format!("/stats/{code}"))
        .await
        .json::<serde_json::Value>();
    assert_eq!(json["click_count"], 0);
}

#[tokio::test]
async fn test_stats_not_found() {
    let server = common::test_server();

    let response = server.get("/stats/nonexistent").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
}
