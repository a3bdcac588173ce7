//! Content repository service.
//!
//! Implements the `ContentRepository` driving port over a `ContentStore`:
//! validates store rows into entities, resolves category references, and
//! enforces newest-first ordering regardless of what the store returned.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::ports::{
    CategoryListing, CategoryRecord, ContentKind, ContentRepository, ContentRepositoryError,
    ContentStore, ContentStoreError, PostRecord,
};
use crate::domain::slug::is_valid_slug;
use crate::domain::{Category, CategoryDraft, CategoryRef, ContentValidationError, Post, PostDraft};

fn map_store_error(error: ContentStoreError) -> ContentRepositoryError {
    warn!(
        error = %error,
        kind = error.kind(),
        retryable = error.is_retryable(),
        "content store query failed"
    );
    ContentRepositoryError::transport(error.to_string())
}

fn map_invalid_row(error: &ContentValidationError) -> ContentRepositoryError {
    ContentRepositoryError::transport(format!("store returned an invalid row: {error}"))
}

fn post_from_record(record: PostRecord) -> Result<Post, ContentValidationError> {
    let category = record
        .category
        .and_then(|link| CategoryRef::resolve(link.slug, link.icon));
    Post::new(PostDraft {
        id: record.id,
        slug: record.slug,
        created_at: record.created_at,
        title: record.title,
        content: record.content,
        cover_image: record.cover_image,
        image_caption: record.image_caption,
        category,
    })
}

fn category_from_record(record: CategoryRecord) -> Result<Category, ContentValidationError> {
    Category::new(CategoryDraft {
        id: record.id,
        slug: record.slug,
        icon: record.icon,
    })
}

/// Validate rows, skipping the ones that fail, and order newest first.
fn newest_first(records: Vec<PostRecord>) -> Vec<Post> {
    let mut posts: Vec<Post> = records
        .into_iter()
        .filter_map(|record| {
            let id = record.id;
            post_from_record(record)
                .inspect_err(|error| warn!(post_id = id, error = %error, "skipping invalid post row"))
                .ok()
        })
        .collect();
    // Stable, so rows sharing a timestamp keep the store's order.
    posts.sort_by(|left, right| right.created_at().cmp(&left.created_at()));
    posts
}

/// Repository service reading through a content store port.
#[derive(Clone)]
pub struct ContentRepositoryService<S> {
    store: Arc<S>,
}

impl<S> ContentRepositoryService<S> {
    /// Create a repository over `store`.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

impl<S> ContentRepositoryService<S>
where
    S: ContentStore,
{
    async fn find_category(&self, slug: &str) -> Result<Category, ContentRepositoryError> {
        if !is_valid_slug(slug) {
            return Err(ContentRepositoryError::not_found(ContentKind::Category, slug));
        }
        let record = self
            .store
            .select_category_by_slug(slug)
            .await
            .map_err(map_store_error)?
            .ok_or_else(|| ContentRepositoryError::not_found(ContentKind::Category, slug))?;
        category_from_record(record).map_err(|error| map_invalid_row(&error))
    }

    async fn posts_in(&self, category: &Category) -> Result<Vec<Post>, ContentRepositoryError> {
        let records = self
            .store
            .select_posts(Some(category.id()))
            .await
            .map_err(map_store_error)?;
        Ok(newest_first(records))
    }
}

#[async_trait]
impl<S> ContentRepository for ContentRepositoryService<S>
where
    S: ContentStore,
{
    async fn list_posts(&self) -> Result<Vec<Post>, ContentRepositoryError> {
        let records = self
            .store
            .select_posts(None)
            .await
            .map_err(map_store_error)?;
        let posts = newest_first(records);
        debug!(count = posts.len(), "listed posts");
        Ok(posts)
    }

    async fn list_posts_by_category(
        &self,
        category_slug: &str,
    ) -> Result<Vec<Post>, ContentRepositoryError> {
        let category = self.find_category(category_slug).await?;
        self.posts_in(&category).await
    }

    async fn get_category_listing(
        &self,
        category_slug: &str,
    ) -> Result<CategoryListing, ContentRepositoryError> {
        let category = self.find_category(category_slug).await?;
        let posts = self.posts_in(&category).await?;
        debug!(category = category_slug, count = posts.len(), "listed category posts");
        Ok(CategoryListing { category, posts })
    }

    async fn get_post_by_slug(&self, slug: &str) -> Result<Post, ContentRepositoryError> {
        if !is_valid_slug(slug) {
            return Err(ContentRepositoryError::not_found(ContentKind::Post, slug));
        }
        let record = self
            .store
            .select_post_by_slug(slug)
            .await
            .map_err(map_store_error)?
            .ok_or_else(|| ContentRepositoryError::not_found(ContentKind::Post, slug))?;
        post_from_record(record).map_err(|error| map_invalid_row(&error))
    }

    async fn get_category_by_slug(&self, slug: &str) -> Result<Category, ContentRepositoryError> {
        self.find_category(slug).await
    }
}

#[cfg(test)]
#[path = "content_repository_tests.rs"]
mod tests;
