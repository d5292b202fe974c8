//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`              - Service index
//! - `GET  /health`        - Storage health check
//! - `POST /shorten`       - Create a short URL
//! - `GET  /stats/{code}`  - Link statistics
//! - `GET  /api/urls`      - Paginated listing
//! - `GET  /{code}`        - Short link redirect
//!
//! Static segments win over `/{code}`, which is why generated codes never
//! take a reserved word such as `health` or `shorten`.

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler, root_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}

/// All routes with the tracing layer, without path normalization.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/{code}", get(redirect_handler))
        .merge(api::routes::public_routes())
        .with_state(state)
        .layer(tracing::layer())
}
