//! Category entity and the weak reference posts hold to it.

use super::ContentValidationError;
use super::validation::{non_blank, validate_slug};
use crate::domain::category_icon::CategoryIcon;
use crate::domain::slug::is_valid_slug;

/// Input payload for [`Category::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryDraft {
    /// Store identifier.
    pub id: i64,
    /// Route slug.
    pub slug: String,
    /// Icon name as stored; unknown names fall back to `Other`.
    pub icon: String,
}

/// Topic grouping posts, identified by slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    id: i64,
    slug: String,
    icon: CategoryIcon,
}

impl Category {
    /// Validate and construct a category.
    pub fn new(draft: CategoryDraft) -> Result<Self, ContentValidationError> {
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
    /// Resolved icon.
    pub const fn icon(&self) -> &CategoryIcon {
        &self.icon
    }

    /// Weak reference to this category, as embedded in posts.
    pub fn to_ref(&self) -> CategoryRef {
        CategoryRef {
            slug: self.slug.clone(),
            icon: self.icon.clone(),
        }
    }
}

impl TryFrom<CategoryDraft> for Category {
    type Error = ContentValidationError;

    fn try_from(draft: CategoryDraft) -> Result<Self, Self::Error> {
        let slug = validate_slug(draft.slug, "category.slug")?;
        Ok(Self {
            id: draft.id,
            slug,
            icon: CategoryIcon::from_name(&draft.icon),
        })
    }
}

/// Post-side reference to a category by slug and icon.
///
/// The reference is a lookup key only. It may point at a category that no
/// longer exists; callers treat it as display data, never as ownership.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRef {
    slug: String,
    icon: CategoryIcon,
}

impl CategoryRef {
    /// Resolve a joined `{slug, icon}` pair into a reference.
    ///
    /// Dangling joins arrive with missing or malformed columns; those resolve
    /// to `None` so the post renders without a category.
    ///
    /// # Examples
    /// ```
    /// use blog_backend::domain::CategoryRef;
    ///
    /// assert!(CategoryRef::resolve(Some("rust".to_owned()), Some("Code".to_owned())).is_some());
    /// assert!(CategoryRef::resolve(None, Some("Code".to_owned())).is_none());
    /// assert!(CategoryRef::resolve(Some("  ".to_owned()), None).is_none());
    /// ```
    pub fn resolve(slug: Option<String>, icon: Option<String>) -> Option<Self> {
        let slug = slug.filter(|value| is_valid_slug(value))?;
        let icon = CategoryIcon::from_name(non_blank(icon).as_deref().unwrap_or_default());
        Some(Self { slug, icon })
    }

    /// Slug of the referenced category.
    pub fn slug(&self) -> &str {
        self.slug.as_str()
    }
    /// Icon of the referenced category.
    pub const fn icon(&self) -> &CategoryIcon {
        &self.icon
    }
}
