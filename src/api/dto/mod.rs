//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation.

pub mod health;
pub mod list;
pub mod pagination;
pub mod root;
pub mod shorten;
pub mod stats;
