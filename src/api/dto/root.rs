//! DTO for the service index endpoint.

use serde::Serialize;
use std::collections::BTreeMap;

/// Service name, version and the public endpoints.
#[derive(Debug, Serialize)]
pub struct ApiInfo {
    pub message: &'static str,
    pub version: &'static str,
    pub endpoints: BTreeMap<&'static str, &'static str>,
}
