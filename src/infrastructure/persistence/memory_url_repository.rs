//! In-memory implementation of the URL repository.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use serde_json::json;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::domain::entities::{NewUrlRecord, StoreSummary, UrlRecord};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// Process-local URL store backed by sharded maps.
///
/// `DashMap` locks one shard at a time, so operations on unrelated codes do not
/// contend. The atomicity guarantees of the PostgreSQL repository are reproduced
/// with per-entry guards:
///
/// - `insert` claims the code through the entry API, so two inserts of the same
///   code cannot both succeed
/// - `increment_clicks` mutates the record under the shard's write guard
///
/// Lock order is always `by_code` before `codes_by_id`; lookups by id copy the code
/// out and release the index guard before touching `by_code`.
#[derive(Debug, Default)]
pub struct InMemoryUrlRepository {
    by_code: DashMap<String, UrlRecord>,
    codes_by_id: DashMap<i64, String>,
    last_id: AtomicI64,
}

impl InMemoryUrlRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn code_for(&self, id: i64) -> Option<String> {
        self.codes_by_id.get(&id).map(|code| code.value().clone())
    }
}

#[async_trait]
impl UrlRepository for InMemoryUrlRepository {
    async fn insert(&self, new_record: NewUrlRecord) -> Result<UrlRecord, AppError> {
        let code = new_record.short_code.clone();

        let record = match self.by_code.entry(code.clone()) {
            Entry::Occupied(_) => {
                return Err(AppError::conflict(
                    "Short code already exists",
                    json!({ "code": code }),
                ));
            }
            Entry::Vacant(slot) => {
                let id = self.last_id.fetch_add(1, Ordering::SeqCst) + 1;
                let record = new_record.into_record(id, Utc::now());
                slot.insert(record.clone());
                record
            }
        };

        self.codes_by_id.insert(record.id, code);

        Ok(record)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<UrlRecord>, AppError> {
        Ok(self.by_code.get(code).map(|r| r.value().clone()))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<UrlRecord>, AppError> {
        let Some(code) = self.code_for(id) else {
            return Ok(None);
        };

        self.find_by_code(&code).await
    }

    async fn increment_clicks(&self, id: i64) -> Result<Option<UrlRecord>, AppError> {
        let Some(code) = self.code_for(id) else {
            return Ok(None);
        };

        let Some(mut record) = self.by_code.get_mut(&code) else {
            return Ok(None);
        };

        record.click_count += 1;
        Ok(Some(record.clone()))
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<UrlRecord>, AppError> {
        let offset = usize::try_from(offset.max(0)).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit.max(0)).unwrap_or(usize::MAX);

        let mut records: Vec<UrlRecord> = self.by_code.iter().map(|r| r.value().clone()).collect();
        records.sort_unstable_by_key(|r| r.id);

        Ok(records.into_iter().skip(offset).take(limit).collect())
    }

    async fn summary(&self) -> Result<StoreSummary, AppError> {
        let mut summary = StoreSummary::default();
        for record in self.by_code.iter() {
            summary.records += 1;
            summary.clicks += record.click_count;
        }

        Ok(summary)
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
