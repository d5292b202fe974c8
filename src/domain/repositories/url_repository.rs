//! Repository trait for URL record storage.

use crate::domain::entities::{NewUrlRecord, StoreSummary, UrlRecord};
use crate::error::AppError;
use async_trait::async_trait;

/// Storage operations behind the shortening core.
///
/// Every method is a single atomic step at the storage layer. Composite flows
/// (allocation with retry, resolution) live in
/// [`crate::application::services::UrlService`].
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::InMemoryUrlRepository`] - sharded in-memory map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Inserts a record under the short code uniqueness constraint.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the short code is already taken. Nothing is
    /// written in that case.
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn insert(&self, new_record: NewUrlRecord) -> Result<UrlRecord, AppError>;

    /// Finds a record by its short code (exact, case-sensitive match).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Finds a record by its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<UrlRecord>, AppError>;

    /// Atomically adds one to the click counter of record `id`.
    ///
    /// Returns the record as it is after the increment, or `None` if no record has
    /// this id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn increment_clicks(&self, id: i64) -> Result<Option<UrlRecord>, AppError>;

    /// Lists records ordered by id ascending.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<UrlRecord>, AppError>;

    /// Returns the number of records and the sum of their click counters.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn summary(&self) -> Result<StoreSummary, AppError>;

    /// Checks that the storage answers.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the storage is unreachable.
    async fn ping(&self) -> Result<(), AppError>;
}
