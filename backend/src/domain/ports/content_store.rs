//! Driven port for the remote content store.
//!
//! The store is consumed as a query interface only. Records mirror the rows
//! the store returns; validation into domain entities happens in the
//! repository service, so adapters stay free of domain rules.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::define_port_error;

/// Category columns joined onto a post row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryLinkRecord {
    /// Joined `categories.slug`.
    pub slug: Option<String>,
    /// Joined `categories.icon`.
    pub icon: Option<String>,
}

/// One `posts` row with its joined category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostRecord {
    /// Primary key.
    pub id: i64,
    /// Route slug.
    pub slug: String,
    /// Publication instant.
    pub created_at: DateTime<Utc>,
    /// Post title.
    pub title: String,
    /// Markdown body; empty when the column is null.
    pub content: String,
    /// Cover image URL.
    pub cover_image: Option<String>,
    /// Cover caption.
    pub image_caption: Option<String>,
    /// Foreign key into `categories`.
    pub category_id: Option<i64>,
    /// `None` when the post has no category or the join found nothing.
    pub category: Option<CategoryLinkRecord>,
}

/// One `categories` row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRecord {
    /// Primary key.
    pub id: i64,
    /// Route slug.
    pub slug: String,
    /// Icon name; empty when the column is null.
    pub icon: String,
}

define_port_error! {
    /// Errors surfaced while querying the content store.
    pub enum ContentStoreError {
        /// Network transport failed or the store answered with a server error.
        Transport { message: String } =>
            "content store transport failed: {message}",
        /// The request timed out.
        Timeout { message: String } =>
            "content store timeout: {message}",
        /// The store rate-limited the request.
        RateLimited { message: String } =>
            "content store rate limited request: {message}",
        /// The store refused the request (client error status).
        Rejected { message: String } =>
            "content store rejected request: {message}",
        /// The response body could not be decoded.
        Decode { message: String } =>
            "content store response decode failed: {message}",
    }
}

impl ContentStoreError {
    /// Return whether retrying this error could help.
    ///
    /// Nothing in the pipeline retries; the classification is reported in
    /// logs so operators can tell outages from bad requests.
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Transport { .. } | Self::Timeout { .. } | Self::RateLimited { .. }
        )
    }
}

/// Port for querying posts and categories.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// `SELECT posts ORDER BY created_at DESC [WHERE category_id = ?]`,
    /// joined with category `{slug, icon}`.
    ///
    /// Adapters should request descending order, but callers must not rely
    /// on it.
    async fn select_posts(
        &self,
        category_id: Option<i64>,
    ) -> Result<Vec<PostRecord>, ContentStoreError>;

    /// `SELECT post WHERE slug = ? LIMIT 1`, joined with its category.
    async fn select_post_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<PostRecord>, ContentStoreError>;

    /// `SELECT category WHERE slug = ? LIMIT 1`.
    async fn select_category_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<CategoryRecord>, ContentStoreError>;
}

/// In-memory store for tests, demos, and offline previews.
///
/// Rows are returned in insertion order and category joins are computed from
/// the category table on every read, so removing a category leaves dangling
/// references exactly as a live store would.
#[derive(Debug, Clone, Default)]
pub struct FixtureContentStore {
    posts: Vec<PostRecord>,
    categories: Vec<CategoryRecord>,
}

impl FixtureContentStore {
    /// Build a store from post and category rows.
    pub fn new(posts: Vec<PostRecord>, categories: Vec<CategoryRecord>) -> Self {
        Self { posts, categories }
    }

    fn joined(&self, post: &PostRecord) -> PostRecord {
        let category = post.category_id.and_then(|id| {
            self.categories
                .iter()
                .find(|category| category.id == id)
                .map(|category| CategoryLinkRecord {
                    slug: Some(category.slug.clone()),
                    icon: Some(category.icon.clone()),
                })
        });
        PostRecord {
            category,
            ..post.clone()
        }
    }
}

#[async_trait]
impl ContentStore for FixtureContentStore {
    async fn select_posts(
        &self,
        category_id: Option<i64>,
    ) -> Result<Vec<PostRecord>, ContentStoreError> {
        Ok(self
            .posts
            .iter()
            .filter(|post| category_id.is_none() || post.category_id == category_id)
            .map(|post| self.joined(post))
            .collect())
    }

    async fn select_post_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<PostRecord>, ContentStoreError> {
        Ok(self
            .posts
            .iter()
            .find(|post| post.slug == slug)
            .map(|post| self.joined(post)))
    }

    async fn select_category_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<CategoryRecord>, ContentStoreError> {
        Ok(self
            .categories
            .iter()
            .find(|category| category.slug == slug)
            .cloned())
    }
}
