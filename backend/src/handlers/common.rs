use chrono::NaiveDateTime;

use crate::{error::WorkdayError, utils::time::parse_local_instant};

/// Parses an optional query instant; absent stays `None`, malformed is an error.
pub fn parse_optional_instant(
    field: &str,
    raw: Option<&str>,
) -> Result<Option<NaiveDateTime>, WorkdayError> {
    match raw.map(str::trim).filter(|v| !v.is_empty()) {
        Some(value) => parse_local_instant(value).map(Some).ok_or_else(|| {
            WorkdayError::InvalidDate(format!(
                "`{}` must be YYYY-MM-DD or YYYY-MM-DDTHH:MM[:SS] (got {})",
                field, value
            ))
        }),
        None => Ok(None),
    }
}
