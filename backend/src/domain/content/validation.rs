//! Validation helpers shared by content entities.

use super::ContentValidationError;
use crate::domain::slug::is_valid_slug;

pub(super) fn validate_slug(
    value: String,
    field: &'static str,
) -> Result<String, ContentValidationError> {
    if !is_valid_slug(&value) {
        return Err(ContentValidationError::InvalidSlug { field, value });
    }
    Ok(value)
}

pub(super) fn validate_non_empty_field(
    value: String,
    field: &'static str,
) -> Result<String, ContentValidationError> {
    if value.trim().is_empty() {
        return Err(ContentValidationError::EmptyField { field });
    }
    Ok(value)
}

/// Blank optional text is treated as absent.
pub(super) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}
