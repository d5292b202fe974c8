//! URL record entity: one short code mapped to one target URL.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A persisted short code mapping.
///
/// `id`, `short_code`, `original_url` and `created_at` never change after insertion.
/// `click_count` only grows, and only through
/// [`crate::domain::repositories::UrlRepository::increment_clicks`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlRecord {
    pub id: i64,
    pub short_code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub click_count: i64,
}

impl UrlRecord {
    pub fn new(
        id: i64,
        short_code: String,
        original_url: String,
        created_at: DateTime<Utc>,
        click_count: i64,
    ) -> Self {
        Self {
            id,
            short_code,
            original_url,
            created_at,
            click_count,
        }
    }
}

/// Input data for inserting a new record.
///
/// The store assigns `id` and `created_at` and starts `click_count` at zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUrlRecord {
    pub short_code: String,
    pub original_url: String,
}

impl NewUrlRecord {
    pub fn new(short_code: impl Into<String>, original_url: impl Into<String>) -> Self {
        Self {
            short_code: short_code.into(),
            original_url: original_url.into(),
        }
    }

    /// Materializes the record as it looks right after insertion.
    pub fn into_record(self, id: i64, created_at: DateTime<Utc>) -> UrlRecord {
        UrlRecord::new(id, self.short_code, self.original_url, created_at, 0)
    }
}

/// Aggregate numbers over the whole store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StoreSummary {
    pub records: i64,
    pub clicks: i64,
}
