#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;
use tinylink::application::services::{DEFAULT_MAX_CODE_ATTEMPTS, UrlService};
use tinylink::domain::entities::{NewUrlRecord, StoreSummary, UrlRecord};
use tinylink::domain::repositories::UrlRepository;
use tinylink::error::AppError;
use tinylink::infrastructure::persistence::{InMemoryUrlRepository, PgUrlRepository};
use tinylink::routes::router;
use tinylink::state::AppState;
use tinylink::utils::code_generator::RandomCodeGenerator;

pub const BASE_URL: &str = "https://sho.rt";

pub fn state_with(repository: Arc<dyn UrlRepository>) -> AppState {
    let service = UrlService::new(
        repository,
        Arc::new(RandomCodeGenerator::default()),
        DEFAULT_MAX_CODE_ATTEMPTS,
    );
    AppState::new(Arc::new(service), BASE_URL)
}

pub fn create_test_state() -> AppState {
    state_with(Arc::new(InMemoryUrlRepository::new()))
}

pub fn create_pg_state(pool: PgPool) -> AppState {
    state_with(Arc::new(PgUrlRepository::new(Arc::new(pool))))
}

/// Full router over a fresh in-memory store.
pub fn test_server() -> TestServer {
    TestServer::new(router(create_test_state())).unwrap()
}

/// Shortens `url` through the API and returns the response body.
pub async fn shorten(server: &TestServer, url: &str) -> serde_json::Value {
    let response = server.post("/shorten").json(&json!({ "url": url })).await;
    response.assert_status_ok();
    response.json::<serde_json::Value>()
}

/// Repository whose storage is unreachable.
pub struct UnavailableRepository;

fn unavailable() -> AppError {
    AppError::internal("Database error", json!({}))
}

#[async_trait]
impl UrlRepository for UnavailableRepository {
    async fn insert(&self, _new_record: NewUrlRecord) -> Result<UrlRecord, AppError> {
        Err(unavailable())
    }

    async fn find_by_code(&self, _code: &str) -> Result<Option<UrlRecord>, AppError> {
        Err(unavailable())
    }

    async fn find_by_id(&self, _id: i64) -> Result<Option<UrlRecord>, AppError> {
        Err(unavailable())
    }

    async fn increment_clicks(&self, _id: i64) -> Result<Option<UrlRecord>, AppError> {
        Err(unavailable())
    }

    async fn list(&self, _offset: i64, _limit: i64) -> Result<Vec<UrlRecord>, AppError> {
        Err(unavailable())
    }

    async fn summary(&self) -> Result<StoreSummary, AppError> {
        Err(unavailable())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(unavailable())
    }
}
