//! DTOs for decoding PostgREST rows.
//!
//! Rows decode into these transport DTOs first and are then mapped into
//! store records in one pass.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::ports::{CategoryLinkRecord, CategoryRecord, PostRecord};

/// Embedded `categories(slug, icon)` resource.
#[derive(Debug, Deserialize)]
pub(super) struct CategoryLinkDto {
    pub(super) slug: Option<String>,
    pub(super) icon: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct PostRowDto {
    pub(super) id: i64,
    pub(super) slug: String,
    pub(super) created_at: DateTime<Utc>,
    pub(super) title: String,
    #[serde(default)]
    pub(super) content: Option<String>,
    #[serde(default)]
    pub(super) cover_image: Option<String>,
    #[serde(default)]
    pub(super) image_caption: Option<String>,
    #[serde(default)]
    pub(super) category_id: Option<i64>,
    #[serde(default)]
    pub(super) categories: Option<CategoryLinkDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct CategoryRowDto {
    pub(super) id: i64,
    pub(super) slug: String,
    #[serde(default)]
    pub(super) icon: Option<String>,
}

impl PostRowDto {
    pub(super) fn into_record(self) -> PostRecord {
        PostRecord {
            id: self.id,
            slug: self.slug,
            created_at: self.created_at,
            title: self.title,
            content: self.content.unwrap_or_default(),
            cover_image: self.cover_image,
            image_caption: self.image_caption,
            category_id: self.category_id,
            category: self.categories.map(|link| CategoryLinkRecord {
                slug: link.slug,
                icon: link.icon,
            }),
        }
    }
}

impl CategoryRowDto {
    pub(super) fn into_record(self) -> CategoryRecord {
        CategoryRecord {
            id: self.id,
            slug: self.slug,
            icon: self.icon.unwrap_or_default(),
        }
    }
}
