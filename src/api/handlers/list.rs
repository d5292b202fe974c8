//! Handler for paginated URL listing.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use serde_json::json;

use crate::api::dto::list::UrlListResponse;
use crate::api::dto::pagination::ListQueryParams;
use crate::error::AppError;
use crate::state::AppState;

/// Lists stored URLs in creation order.
///
/// # Endpoint
///
/// `GET /api/urls`
///
/// # Query Parameters
///
/// - `skip` (or `offset`, optional): Records to skip (default: 0)
/// - `limit` (optional): Page size (default: 100, max: 1000)
///
/// # Errors
///
/// Returns 422 Unprocessable Entity if a parameter is not an integer or the
/// window is out of range.
pub async fn list_handler(
    State(state): State<AppState>,
    params: Result<Query<ListQueryParams>, QueryRejection>,
) -> Result<Json<UrlListResponse>, AppError> {
    let Query(params) = params?;
    let (offset, limit) = params
        .validate_and_get_offset_limit()
        .map_err(|e| AppError::bad_request(e, json!({ "skip": params.skip, "limit": params.limit })))?;

    let records = state.url_service.list(offset, limit).await?;

    Ok(Json(UrlListResponse::new(
        records.into_iter().map(Into::into).collect(),
    )))
}
