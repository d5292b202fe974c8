//! Handler for single-link statistics.

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::json;

use crate::api::dto::stats::UrlStats;
use crate::error::AppError;
use crate::state::AppState;

/// Returns a link and its click count without counting a click.
///
/// # Endpoint
///
/// `GET /stats/{code}`
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<UrlStats>, AppError> {
    let record = state
        .url_service
        .get_by_code(&code)
        .await?
        .ok_or_else(|| AppError::not_found("Short URL not found", json!({ "code": code })))?;

    Ok(Json(record.into()))
}
