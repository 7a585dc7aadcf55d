pub mod availability;
pub mod chat_link;
pub mod invoice;
pub mod lead;
pub mod rates;
pub mod rooms;

use crate::errors::ValidationError;

/// Parses a whole number from form or query text. Surrounding whitespace is ignored.
pub(crate) fn parse_integer(field: &'static str, raw: &str) -> Result<i64, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Missing { field });
    }
    trimmed
        .parse::<i64>()
        .map_err(|_| ValidationError::NotAnInteger {
            field,
            value: trimmed.to_string(),
        })
}
