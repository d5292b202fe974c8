//! API route configuration.

use crate::api::handlers::{list_handler, shorten_handler, stats_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Public link management routes.
///
/// # Endpoints
///
/// - `POST /shorten`       - Create a short URL
/// - `GET  /stats/{code}`  - Record and click count for one code
/// - `GET  /api/urls`      - Paginated listing in creation order
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/stats/{code}", get(stats_handler))
        .route("/api/urls", get(list_handler))
}
