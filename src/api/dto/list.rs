//! DTOs for the URL listing endpoint.

use serde::Serialize;

use super::stats::UrlStats;

/// One page of stored URLs.
///
/// `count` is the number of items on this page, not the size of the store.
#[derive(Debug, Serialize)]
pub struct UrlListResponse {
    pub urls: Vec<UrlStats>,
    pub count: usize,
}

impl UrlListResponse {
    pub fn new(urls: Vec<UrlStats>) -> Self {
        Self {
            count: urls.len(),
            urls,
        }
    }
}
