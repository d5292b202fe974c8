//! Handler for the service index.

use axum::Json;
use std::collections::BTreeMap;

use crate::api::dto::root::ApiInfo;

/// Describes the service and its public endpoints.
///
/// # Endpoint
///
/// `GET /`
pub async fn root_handler() -> Json<ApiInfo> {
    let endpoints = BTreeMap::from([
        ("POST /shorten", "Create a short URL"),
        ("GET /{short_code}", "Redirect to original URL"),
        ("GET /stats/{short_code}", "Get URL statistics"),
        ("GET /api/urls", "List URLs (skip, limit)"),
        ("GET /health", "Service health"),
    ]);

    Json(ApiInfo {
        message: "URL Shortener API",
        version: env!("CARGO_PKG_VERSION"),
        endpoints,
    })
}
