//! Short code allocation, resolution and listing.

use std::sync::Arc;

use crate::domain::entities::{NewUrlRecord, StoreSummary, UrlRecord};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::code_generator::{CodeGenerator, is_reserved};
use serde_json::json;

/// Default number of candidate codes tried by [`UrlService::create`].
pub const DEFAULT_MAX_CODE_ATTEMPTS: u32 = 10;

/// Service owning the URL record lifecycle.
///
/// `R` is usually `dyn UrlRepository` so that the HTTP layer does not depend on the
/// storage backend chosen at startup.
pub struct UrlService<R: UrlRepository + ?Sized> {
    repository: Arc<R>,
    generator: Arc<dyn CodeGenerator>,
    max_attempts: u32,
}

impl<R: UrlRepository + ?Sized> UrlService<R> {
    /// Creates a new URL service.
    ///
    /// `max_attempts` is clamped to at least one.
    pub fn new(repository: Arc<R>, generator: Arc<dyn CodeGenerator>, max_attempts: u32) -> Self {
        Self {
            repository,
            generator,
            max_attempts: max_attempts.max(1),
        }
    }

    /// Allocates a fresh short code for `original_url` and persists the record.
    ///
    /// `original_url` is stored verbatim; callers validate and normalize it first
    /// (see [`crate::utils::url_normalizer::normalize_url`]). Calling `create` twice
    /// with the same URL yields two records with different codes.
    ///
    /// # Allocation
    ///
    /// Each attempt asks the generator for a candidate and inserts it directly. The
    /// repository's uniqueness constraint decides the race between concurrent
    /// creators: on [`AppError::Conflict`] the candidate is discarded and a new one
    /// is drawn. Candidates that shadow fixed routes are discarded without touching
    /// storage.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if:
    /// - the storage fails (not retried)
    /// - every one of `max_attempts` candidates collided, which means the code space
    ///   is too small for the number of stored records
    pub async fn create(&self, original_url: &str) -> Result<UrlRecord, AppError> {
        for attempt in 1..=self.max_attempts {
            let code = self.generator.generate();

            if is_reserved(&code) {
                tracing::debug!(attempt, code = %code, "reserved code generated, retrying");
                continue;
            }

            match self
                .repository
                .insert(NewUrlRecord::new(code, original_url))
                .await
            {
                Ok(record) => {
                    metrics::counter!("tinylink_urls_created_total").increment(1);
                    tracing::info!(id = record.id, code = %record.short_code, "short url created");
                    return Ok(record);
                }
                Err(e) if e.is_conflict() => {
                    metrics::counter!("tinylink_code_collisions_total").increment(1);
                    tracing::warn!(attempt, "short code collision, retrying");
                }
                Err(e) => return Err(e),
            }
        }

        tracing::error!(
            attempts = self.max_attempts,
            "failed to allocate a unique short code"
        );

        Err(AppError::internal(
            "Failed to generate unique code",
            json!({ "reason": "code space exhausted", "attempts": self.max_attempts }),
        ))
    }

    /// Looks up a record by short code without side effects.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn get_by_code(&self, code: &str) -> Result<Option<UrlRecord>, AppError> {
        self.repository.find_by_code(code).await
    }

    /// Looks up a record by id without side effects.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<UrlRecord>, AppError> {
        self.repository.find_by_id(id).await
    }

    /// Atomically adds one click to `record` and returns the stored state.
    ///
    /// The increment happens in storage, so the returned count also reflects clicks
    /// recorded concurrently by other requests.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the record no longer exists.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn increment_click(&self, record: &UrlRecord) -> Result<UrlRecord, AppError> {
        self.repository
            .increment_clicks(record.id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(
                    "Short URL not found",
                    json!({ "id": record.id, "code": record.short_code }),
                )
            })
    }

    /// Resolves a short code: lookup followed by a click increment.
    ///
    /// Returns `Ok(None)` for unknown codes; no counter is touched in that case.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn resolve(&self, code: &str) -> Result<Option<UrlRecord>, AppError> {
        let Some(record) = self.repository.find_by_code(code).await? else {
            return Ok(None);
        };

        let record = self.increment_click(&record).await?;
        metrics::counter!("tinylink_redirects_total").increment(1);

        Ok(Some(record))
    }

    /// Returns one page of records in insertion order.
    ///
    /// Paging is stateless: the same `offset`/`limit` always address the same window
    /// of ids. Negative values are treated as zero.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn list(&self, offset: i64, limit: i64) -> Result<Vec<UrlRecord>, AppError> {
        self.repository.list(offset.max(0), limit.max(0)).await
    }

    /// Total number of records and total clicks across them.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn summary(&self) -> Result<StoreSummary, AppError> {
        self.repository.summary().await
    }

    /// Checks that the underlying storage answers.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the storage is unreachable.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}
