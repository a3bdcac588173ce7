//! Shared slug validation predicates for content entities.
//!
//! Slugs are trimmed, non-empty path segments: no whitespace and none of the
//! URL delimiters `/`, `?`, or `#`.

/// Return `true` when `value` can be used as a slug.
pub(crate) fn is_valid_slug(value: &str) -> bool {
    is_trimmed_non_empty(value) && has_allowed_slug_chars(value)
}

fn is_trimmed_non_empty(value: &str) -> bool {
    !value.is_empty() && value.trim() == value
}

fn has_allowed_slug_chars(value: &str) -> bool {
    value
        .chars()
        .all(|ch| !ch.is_whitespace() && !matches!(ch, '/' | '?' | '#'))
}
