//! Display-ready projections of fetched content.
//!
//! Views are computed once, when a page reaches `Success`, so the renderer
//! never recomputes reading time, excerpts, dates, or links.

use crate::domain::ports::CategoryListing;
use crate::domain::{
    BLOG_INDEX_PATH, Category, CategoryIcon, CategoryRef, LocalizedPathResolver, Post,
    category_path, format_date, plain_excerpt, post_path, reading_time,
};

/// Category chip shown on cards and breadcrumbs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryBadge {
    /// Route slug.
    pub slug: String,
    /// Resolved icon.
    pub icon: CategoryIcon,
    /// Glyph rendered for `icon`.
    pub glyph: &'static str,
    /// Localised link to the category listing.
    pub link: String,
}

/// Post entry in a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostCard {
    /// Route slug.
    pub slug: String,
    /// Post title.
    pub title: String,
    /// Localised link to the post.
    pub link: String,
    /// Cover image URL.
    pub cover_image: Option<String>,
    /// Badge of the referenced category, if it still exists.
    pub category: Option<CategoryBadge>,
    /// Publication date in the page locale.
    pub published_on: String,
    /// Estimated reading time in minutes.
    pub reading_minutes: u32,
    /// Full stripped text; clamping is the renderer's job.
    pub excerpt: String,
}

/// Single-post page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDetail {
    /// Route slug.
    pub slug: String,
    /// Post title.
    pub title: String,
    /// Raw markdown, handed to the markdown renderer.
    pub content: String,
    /// Cover image URL.
    pub cover_image: Option<String>,
    /// Present only alongside a cover image.
    pub image_caption: Option<String>,
    /// Badge of the referenced category, if it still exists.
    pub category: Option<CategoryBadge>,
    /// Publication date in the page locale.
    pub published_on: String,
    /// Estimated reading time in minutes.
    pub reading_minutes: u32,
    /// Plain-text summary for page metadata.
    pub excerpt: String,
    /// Localised link back to the post list.
    pub blog_link: String,
}

/// Heading of a category page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryHeader {
    /// Route slug.
    pub slug: String,
    /// Resolved icon.
    pub icon: CategoryIcon,
    /// Number of posts listed under the heading.
    pub post_count: usize,
    /// Localised link to this category.
    pub link: String,
    /// Localised link back to the post list.
    pub blog_link: String,
}

/// Builds views for one locale at a time.
#[derive(Debug, Clone, Default)]
pub struct PagePresenter {
    paths: LocalizedPathResolver,
}

impl PagePresenter {
    /// Create a presenter resolving links with `paths`.
    pub fn new(paths: LocalizedPathResolver) -> Self {
        Self { paths }
    }

    /// Path resolver used for every link.
    pub fn paths(&self) -> &LocalizedPathResolver {
        &self.paths
    }

    /// Badge linking to the category page.
    pub fn category_badge(&self, category: &CategoryRef, locale: &str) -> CategoryBadge {
        CategoryBadge {
            slug: category.slug().to_owned(),
            icon: category.icon().clone(),
            glyph: category.icon().glyph(),
            link: self.paths.resolve(&category_path(category.slug()), locale),
        }
    }

    /// Card for a post list.
    pub fn post_card(&self, post: &Post, locale: &str) -> PostCard {
        PostCard {
            slug: post.slug().to_owned(),
            title: post.title().to_owned(),
            link: self.paths.resolve(&post_path(post.slug()), locale),
            cover_image: post.cover_image().map(str::to_owned),
            category: post
                .category()
                .map(|category| self.category_badge(category, locale)),
            published_on: format_date(post.created_at(), locale),
            reading_minutes: reading_time(post.content()),
            excerpt: plain_excerpt(post.content()),
        }
    }

    /// Cards for `posts`, preserving order.
    pub fn post_cards(&self, posts: &[Post], locale: &str) -> Vec<PostCard> {
        posts
            .iter()
            .map(|post| self.post_card(post, locale))
            .collect()
    }

    /// Detail view for a single post page.
    pub fn post_detail(&self, post: &Post, locale: &str) -> PostDetail {
        PostDetail {
            category: post
                .category()
                .map(|category| self.category_badge(category, locale)),
            published_on: format_date(post.created_at(), locale),
            reading_minutes: reading_time(post.content()),
            excerpt: plain_excerpt(post.content()),
            blog_link: self.paths.resolve(BLOG_INDEX_PATH, locale),
            image_caption: post.image_caption().map(str::to_owned),
            cover_image: post.cover_image().map(str::to_owned),
            slug: post.slug().to_owned(),
            title: post.title().to_owned(),
            content: post.content().to_owned(),
        }
    }

    /// Heading for a category page listing `post_count` posts.
    pub fn category_header(
        &self,
        category: &Category,
        post_count: usize,
        locale: &str,
    ) -> CategoryHeader {
        CategoryHeader {
            slug: category.slug().to_owned(),
            icon: category.icon().clone(),
            post_count,
            link: self.paths.resolve(&category_path(category.slug()), locale),
            blog_link: self.paths.resolve(BLOG_INDEX_PATH, locale),
        }
    }

    pub(super) fn category_listing(
        &self,
        listing: &CategoryListing,
        locale: &str,
    ) -> (CategoryHeader, Vec<PostCard>) {
        (
            self.category_header(&listing.category, listing.posts.len(), locale),
            self.post_cards(&listing.posts, locale),
        )
    }
}
