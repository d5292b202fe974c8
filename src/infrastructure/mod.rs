//! Infrastructure layer implementing the storage contract of the domain layer.
//!
//! - [`persistence`] - PostgreSQL and in-memory repository implementations

pub mod persistence;
