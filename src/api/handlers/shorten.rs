//! Handler for link shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::url_normalizer::normalize_url;

/// Creates a short link for one URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://www.example.com" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "id": 1,
///   "original_url": "https://www.example.com/",
///   "short_code": "aZ3kP9",
///   "short_url": "http://localhost:3000/aZ3kP9",
///   "created_at": "2026-01-01T12:00:00Z",
///   "click_count": 0
/// }
/// ```
///
/// Shortening the same URL twice creates two independent links.
///
/// # Errors
///
/// Returns 422 Unprocessable Entity if the body is not a JSON object with a `url`
/// string, or if the URL is not an absolute HTTP(S) URL.
/// Returns 500 Internal Server Error on storage failures.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let original_url = normalize_url(&payload.url).map_err(|e| {
        AppError::bad_request("Invalid URL format", json!({ "reason": e.to_string() }))
    })?;

    let record = state.url_service.create(&original_url).await?;
    let short_url = state.short_url(&record.short_code);

    Ok(Json(ShortenResponse::new(record, short_url)))
}
