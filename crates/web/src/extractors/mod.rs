//! Request extractors and parameter parsing.

mod form_fields;

pub use form_fields::{FieldErrors, FormFields, MSG_FORM_UNREADABLE};

use common::{AppError, AppResult};

/// Parse a record id parameter.
pub fn parse_id(raw: Option<&str>) -> AppResult<i32> {
    let raw = raw.unwrap_or_default();
    raw.trim()
        .parse()
        .map_err(|_| AppError::bad_request(format!("Invalid id: {}", raw)))
}
