//! Blog content entities.
//!
//! Posts and categories are authored elsewhere and arrive as store rows.
//! Rows become drafts, and drafts are validated into immutable entities.

use std::fmt;

mod category;
mod post;
mod validation;


pub use category::{Category, CategoryDraft, CategoryRef};
pub use post::{Post, PostDraft};

/// Validation errors returned by content entity constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentValidationError {
    /// A slug is blank, padded, or not a single path segment.
    InvalidSlug {
        /// Qualified field name, such as `post.slug`.
        field: &'static str,
        /// Rejected value.
        value: String,
    },
    /// A required text field is blank.
    EmptyField {
        /// Qualified field name, such as `post.title`.
        field: &'static str,
    },
}

impl fmt::Display for ContentValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSlug { field, value } => write!(
                f,
                "{field} must be a trimmed path segment without whitespace (got {value:?})"
            ),
            Self::EmptyField { field } => write!(f, "{field} must not be empty"),
        }
    }
}

impl std::error::Error for ContentValidationError {}
