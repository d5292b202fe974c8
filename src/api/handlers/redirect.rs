//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL and counts the click.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// The click is committed before the redirect is sent, so a subsequent
/// `GET /stats/{code}` already includes it.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
/// Returns 500 Internal Server Error on storage failures.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let record = state
        .url_service
        .resolve(&code)
        .await?
        .ok_or_else(|| AppError::not_found("Short URL not found", json!({ "code": code })))?;

    debug!(code = %record.short_code, clicks = record.click_count, "redirecting");

    Ok((StatusCode::FOUND, [(header::LOCATION, record.original_url)]).into_response())
}
