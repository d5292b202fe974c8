//! DTOs for the link shortening endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::UrlRecord;

/// Request to shorten one URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten (must be an absolute HTTP/HTTPS URL).
    #[validate(url(message = "Invalid URL format"))]
    pub url: String,
}

/// A freshly created short link.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    pub short_url: String,
    pub created_at: DateTime<Utc>,
    pub click_count: i64,
}

impl ShortenResponse {
    pub fn new(record: UrlRecord, short_url: String) -> Self {
        Self {
            id: record.id,
            original_url: record.original_url,
            short_code: record.short_code,
            short_url,
            created_at: record.created_at,
            click_count: record.click_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_url_passes_validation() {
        let request: ShortenRequest =
            serde_json::from_str(r#"{"url": "https://www.example.com"}"#).unwrap();
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_relative_url_fails_validation() {
        let request = ShortenRequest {
            url: "not-a-valid-url".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_missing_url_field_is_rejected() {
        assert!(serde_json::from_str::<ShortenRequest>("{}").is_err());
    }
}
