//! PostgreSQL implementation of the URL repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewUrlRecord, StoreSummary, UrlRecord};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// Row shape shared by every query that returns a full record.
#[derive(sqlx::FromRow)]
struct UrlRow {
    id: i64,
    short_code: String,
    original_url: String,
    created_at: DateTime<Utc>,
    click_count: i64,
}

impl From<UrlRow> for UrlRecord {
    fn from(r: UrlRow) -> Self {
        UrlRecord::new(r.id, r.short_code, r.original_url, r.created_at, r.click_count)
    }
}

/// PostgreSQL repository for URL records.
///
/// Each method runs exactly one statement on a connection borrowed from the pool;
/// the connection goes back to the pool when the statement future completes or is
/// dropped. Uniqueness and atomicity come from the database:
///
/// - `insert` relies on the `urls_short_code_key` unique constraint
/// - `increment_clicks` is a single `UPDATE ... SET click_count = click_count + 1`
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn insert(&self, new_record: NewUrlRecord) -> Result<UrlRecord, AppError> {
        let row: UrlRow = sqlx::query_as(
            r#"
            INSERT INTO urls (short_code, original_url)
            VALUES ($1, $2)
            RETURNING id, short_code, original_url, created_at, click_count
            "#,
        )
        .bind(&new_record.short_code)
        .bind(&new_record.original_url)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<UrlRecord>, AppError> {
        let row: Option<UrlRow> = sqlx::query_as(
            r#"
            SELECT id, short_code, original_url, created_at, click_count
            FROM urls
            WHERE short_code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<UrlRecord>, AppError> {
        let row: Option<UrlRow> = sqlx::query_as(
            r#"
            SELECT id, short_code, original_url, created_at, click_count
            FROM urls
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn increment_clicks(&self, id: i64) -> Result<Option<UrlRecord>, AppError> {
        let row: Option<UrlRow> = sqlx::query_as(
            r#"
            UPDATE urls
            SET click_count = click_count + 1
            WHERE id = $1
            RETURNING id, short_code, original_url, created_at, click_count
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<UrlRecord>, AppError> {
        let rows: Vec<UrlRow> = sqlx::query_as(
            r#"
            SELECT id, short_code, original_url, created_at, click_count
            FROM urls
            ORDER BY id ASC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn summary(&self) -> Result<StoreSummary, AppError> {
        let (records, clicks): (i64, i64) = sqlx::query_as(
            "SELECT COUNT(*)::bigint, COALESCE(SUM(click_count), 0)::bigint FROM urls",
        )
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(StoreSummary { records, clicks })
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
