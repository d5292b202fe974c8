//! Pagination query parameters.

use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};

/// Default page size of the listing endpoint.
pub const DEFAULT_LIMIT: i64 = 100;

/// Largest accepted page size.
pub const MAX_LIMIT: i64 = 1000;

/// Offset/limit window for `GET /api/urls`.
///
/// `skip` is also accepted as `offset`.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct ListQueryParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default, alias = "offset")]
    pub skip: Option<i64>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub limit: Option<i64>,
}

impl ListQueryParams {
    /// Validates the window and returns `(offset, limit)`.
    ///
    /// # Defaults
    ///
    /// - `skip`: 0
    /// - `limit`: 100
    ///
    /// # Validation
    ///
    /// - `skip` must be >= 0
    /// - `limit` must be between 1 and 1000
    pub fn validate_and_get_offset_limit(&self) -> Result<(i64, i64), String> {
        let offset = self.skip.unwrap_or(0);
        let limit = self.limit.unwrap_or(DEFAULT_LIMIT);

        if offset < 0 {
            return Err("skip must be greater than or equal to 0".to_string());
        }

        if !(1..=MAX_LIMIT).contains(&limit) {
            return Err(format!("limit must be between 1 and {MAX_LIMIT}"));
        }

        Ok((offset, limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(skip: Option<i64>, limit: Option<i64>) -> ListQueryParams {
        ListQueryParams { skip, limit }
    }

    #[test]
    fn test_defaults() {
        let (offset, limit) = params(None, None).validate_and_get_offset_limit().unwrap();
        assert_eq!(offset, 0);
        assert_eq!(limit, DEFAULT_LIMIT);
    }

    #[test]
    fn test_explicit_window() {
        let (offset, limit) = params(Some(2), Some(2))
            .validate_and_get_offset_limit()
            .unwrap();
        assert_eq!((offset, limit), (2, 2));
    }

    #[test]
    fn test_negative_skip_is_error() {
        assert!(params(Some(-1), None).validate_and_get_offset_limit().is_err());
    }

    #[test]
    fn test_limit_bounds() {
        assert!(params(None, Some(0)).validate_and_get_offset_limit().is_err());
        assert!(params(None, Some(1)).validate_and_get_offset_limit().is_ok());
        assert!(params(None, Some(MAX_LIMIT)).validate_and_get_offset_limit().is_ok());
        assert!(params(None, Some(MAX_LIMIT + 1)).validate_and_get_offset_limit().is_err());
    }

    #[test]
    fn test_parses_string_values_and_offset_alias() {
        let p: ListQueryParams = serde_json::from_str(r#"{"offset": "4", "limit": "2"}"#).unwrap();
        assert_eq!(p.skip, Some(4));
        assert_eq!(p.limit, Some(2));
    }

    #[test]
    fn test_non_numeric_value_is_error() {
        assert!(serde_json::from_str::<ListQueryParams>(r#"{"limit": "ten"}"#).is_err());
    }
}
