//! Driving port for reading blog content.
//!
//! Page orchestration depends on this trait rather than on the store, so the
//! lifecycle controller can be exercised with doubles and the repository
//! service can be swapped without touching presentation code.

use std::fmt;

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::{Category, Post};

/// Entity kind named in not-found errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    /// A blog post.
    Post,
    /// A post category.
    Category,
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Post => f.write_str("post"),
            Self::Category => f.write_str("category"),
        }
    }
}

define_port_error! {
    /// Errors raised when reading content.
    pub enum ContentRepositoryError {
        /// The queried slug does not exist.
        NotFound { entity: ContentKind, slug: String } =>
            "{entity} '{slug}' not found",
        /// The store could not be reached or answered unusably.
        Transport { message: String } =>
            "content unavailable: {message}",
    }
}

/// A category together with its posts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryListing {
    /// The requested category.
    pub category: Category,
    /// Newest first.
    pub posts: Vec<Post>,
}

/// Port for read-only content queries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// Every post, newest first, each with its optional category reference.
    async fn list_posts(&self) -> Result<Vec<Post>, ContentRepositoryError>;

    /// Posts of one category, newest first.
    ///
    /// Fails with `NotFound` when the category slug does not exist. A
    /// category without posts yields an empty vector.
    async fn list_posts_by_category(
        &self,
        category_slug: &str,
    ) -> Result<Vec<Post>, ContentRepositoryError>;

    /// Category and its posts in one call, for category pages.
    async fn get_category_listing(
        &self,
        category_slug: &str,
    ) -> Result<CategoryListing, ContentRepositoryError>;

    /// One post by slug; `NotFound` when absent.
    async fn get_post_by_slug(&self, slug: &str) -> Result<Post, ContentRepositoryError>;

    /// One category by slug; `NotFound` when absent.
    async fn get_category_by_slug(&self, slug: &str) -> Result<Category, ContentRepositoryError>;
}
