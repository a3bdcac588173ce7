//! Post entity.

use chrono::{DateTime, Utc};

use super::ContentValidationError;
use super::category::CategoryRef;
use super::validation::{non_blank, validate_non_empty_field, validate_slug};

/// Input payload for [`Post::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    /// Store identifier.
    pub id: i64,
    /// Route slug.
    pub slug: String,
    /// Publication instant.
    pub created_at: DateTime<Utc>,
    /// Title; must not be blank.
    pub title: String,
    /// Raw markdown body.
    pub content: String,
    /// Cover image URL; blank values are dropped.
    pub cover_image: Option<String>,
    /// Cover caption; blank values are dropped.
    pub image_caption: Option<String>,
    /// Joined category, if the reference resolved.
    pub category: Option<CategoryRef>,
}

/// Published post snapshot.
///
/// ## Invariants
/// - `slug` is a valid slug and `title` is not blank.
/// - `cover_image` and `image_caption` are either absent or non-blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    id: i64,
    slug: String,
    created_at: DateTime<Utc>,
    title: String,
    content: String,
    cover_image: Option<String>,
    image_caption: Option<String>,
    category: Option<CategoryRef>,
}

impl Post {
    /// Validate and construct a post.
    pub fn new(draft: PostDraft) -> Result<Self, ContentValidationError> {
        Self::try_from(draft)
    }

    /// Store identifier.
    pub const fn id(&self) -> i64 {
        self.id
    }
    /// Route slug.
    pub fn slug(&self) -> &str {
        self.slug.as_str()
    }
    /// Publication instant.
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
    /// Post title.
    pub fn title(&self) -> &str {
        self.title.as_str()
    }
    /// Raw markdown body.
    pub fn content(&self) -> &str {
        self.content.as_str()
    }
    /// Cover image URL.
    pub fn cover_image(&self) -> Option<&str> {
        self.cover_image.as_deref()
    }

    /// Caption of the cover image; always `None` when there is no cover.
    pub fn image_caption(&self) -> Option<&str> {
        self.cover_image
            .as_ref()
            .and(self.image_caption.as_deref())
    }

    /// Category reference, absent for uncategorised or dangling posts.
    pub const fn category(&self) -> Option<&CategoryRef> {
        self.category.as_ref()
    }
}

impl TryFrom<PostDraft> for Post {
    type Error = ContentValidationError;

    fn try_from(draft: PostDraft) -> Result<Self, Self::Error> {
        let slug = validate_slug(draft.slug, "post.slug")?;
        let title = validate_non_empty_field(draft.title, "post.title")?;

        Ok(Self {
            id: draft.id,
            slug,
            created_at: draft.created_at,
            title,
            content: draft.content,
            cover_image: non_blank(draft.cover_image),
            image_caption: non_blank(draft.image_caption),
            category: draft.category,
        })
    }
}
