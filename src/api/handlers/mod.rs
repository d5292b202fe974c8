//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to one endpoint.

pub mod health;
pub mod list;
pub mod redirect;
pub mod root;
pub mod shorten;
pub mod stats;

pub use health::health_handler;
pub use list::list_handler;
pub use redirect::redirect_handler;
pub use root::root_handler;
pub use shorten::shorten_handler;
pub use stats::stats_handler;
