//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide the API used by HTTP handlers and
//! the admin CLI.
//!
//! - [`services::url_service::UrlService`] - Short code allocation, resolution and listing

pub mod services;
