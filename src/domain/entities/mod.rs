//! Core domain entities.
//!
//! - [`UrlRecord`] - A persisted short code mapping
//! - [`NewUrlRecord`] - Input for creating a record
//! - [`StoreSummary`] - Store-wide totals

pub mod url_record;

pub use url_record::{NewUrlRecord, StoreSummary, UrlRecord};
