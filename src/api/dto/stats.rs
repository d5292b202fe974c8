//! DTO describing one stored short link.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::UrlRecord;

/// Public view of a URL record, used by the stats and listing endpoints.
#[derive(Debug, Serialize)]
pub struct UrlStats {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
    pub click_count: i64,
}

impl From<UrlRecord> for UrlStats {
    fn from(record: UrlRecord) -> Self {
        Self {
            id: record.id,
            original_url: record.original_url,
            short_code: record.short_code,
            created_at: record.created_at,
            click_count: record.click_count,
        }
    }
}
