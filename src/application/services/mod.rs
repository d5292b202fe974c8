//! Business logic services for the application layer.

pub mod url_service;

pub use url_service::{DEFAULT_MAX_CODE_ATTEMPTS, UrlService};
