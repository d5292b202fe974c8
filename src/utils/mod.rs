//! Utility functions for code generation and URL processing.
//!
//! - [`code_generator`] - Short code generation
//! - [`db_error`] - Database error classification
//! - [`url_normalizer`] - URL validation and normalization

pub mod code_generator;
pub mod db_error;
pub mod url_normalizer;
