//! Helpers for classifying database errors.

/// Name of the unique constraint guarding `urls.short_code`.
pub const SHORT_CODE_CONSTRAINT: &str = "urls_short_code_key";

/// Returns true if `e` is a unique violation on the short code column.
///
/// Any other unique violation is not a collision; [`crate::error::map_sqlx_error`]
/// turns it into an internal error that the allocation loop does not retry.
pub fn is_unique_violation_on_code(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    matches!(db_err.constraint(), Some(SHORT_CODE_CONSTRAINT))
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_database_errors_are_not_collisions() {
        assert!(!is_unique_violation_on_code(&sqlx::Error::RowNotFound));
        assert!(!is_unique_violation_on_code(&sqlx::Error::PoolTimedOut));
    }

    #[test]
    fn test_only_the_short_code_constraint_is_a_collision() {
        use test_support::database_error;

        assert!(is_unique_violation_on_code(&database_error(
            true,
            Some(SHORT_CODE_CONSTRAINT)
        )));
        assert!(!is_unique_violation_on_code(&database_error(true, Some("urls_pkey"))));
        assert!(!is_unique_violation_on_code(&database_error(true, None)));
        assert!(!is_unique_violation_on_code(&database_error(
            false,
            Some(SHORT_CODE_CONSTRAINT)
        )));
    }
}
