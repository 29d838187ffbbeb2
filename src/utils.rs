//! Utility functions for common operations.

use crate::error::CatalogError;
use chrono::{DateTime, NaiveDate};

/// Descriptions with at least this many words render collapsed.
pub const LONG_DESCRIPTION_WORDS: usize = 80;

/// Checks if an HTTP response is successful, and if not, returns a detailed error.
///
/// A 404 becomes [`CatalogError::NotFound`]; any other failure status becomes
/// [`CatalogError::Status`].
pub async fn check_response_status(
    response: reqwest::Response,
) -> Result<reqwest::Response, CatalogError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let url = response.url().to_string();
    if status == reqwest::StatusCode::NOT_FOUND {
        return Err(CatalogError::NotFound(url));
    }

    Err(CatalogError::Status {
        url,
        status: status.as_u16(),
    })
}

/// Returns true if the text should be shown collapsed by default.
pub fn is_long_text(text: &str) -> bool {
    text.split_whitespace().count() >= LONG_DESCRIPTION_WORDS
}

/// Formats a catalog timestamp as `dd/mm/YYYY`.
///
/// Accepts RFC 3339 timestamps and bare dates; anything else is returned as-is.
pub fn format_publish_date(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%d/%m/%Y").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%d/%m/%Y").to_string();
    }
    raw.to_string()
}
