//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::UrlService;
use crate::domain::repositories::UrlRepository;

/// URL service over whichever storage backend was selected at startup.
pub type SharedUrlService = Arc<UrlService<dyn UrlRepository>>;

#[derive(Clone)]
pub struct AppState {
    pub url_service: SharedUrlService,
    /// Prefix of composed short links, e.g. `https://sho.rt`.
    pub base_url: String,
}

impl AppState {
    pub fn new(url_service: SharedUrlService, base_url: impl Into<String>) -> Self {
        Self {
            url_service,
            base_url: base_url.into(),
        }
    }

    /// Joins the configured base URL and `code` into the public short link.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), code)
    }
}
