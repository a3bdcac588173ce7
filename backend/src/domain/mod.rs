//! Domain primitives, services, and page orchestration.
//!
//! Purpose: Define strongly typed blog entities and the pure helpers used to
//! present them, plus the services that read them through ports. Entities
//! are immutable snapshots; nothing in this layer writes to the store.
//!
//! Public surface:
//! - Post / Category / CategoryRef: validated content entities.
//! - CategoryIcon: icon name lookup with an exhaustive fallback.
//! - LocalizedPathResolver, format_date, SupportedLocale: localisation.
//! - reading_time / plain_excerpt: content metrics.
//! - ContentRepositoryService: `ContentRepository` over a `ContentStore`.
//! - PageLifecycleController: per-view state machine with a stale-request
//!   guard.

pub mod category_icon;
pub mod content;
pub mod content_metrics;
pub mod content_repository;
pub mod date_localizer;
pub mod localization;
pub mod localized_path;
pub mod page_lifecycle;
pub mod ports;
mod slug;

pub use self::category_icon::CategoryIcon;
pub use self::content::{
    Category, CategoryDraft, CategoryRef, ContentValidationError, Post, PostDraft,
};
pub use self::content_metrics::{WORDS_PER_MINUTE, plain_excerpt, reading_time};
pub use self::content_repository::ContentRepositoryService;
pub use self::date_localizer::format_date;
pub use self::localization::{DEFAULT_LOCALE, LocaleCode, SupportedLocale};
pub use self::localized_path::{
    BLOG_INDEX_PATH, HOME_PATH, LocalizedPathResolver, category_path, post_path,
};
pub use self::page_lifecycle::{
    ActivationHandle, ActivationOutcome, CategoryBadge, CategoryHeader, PageActivation,
    PageContent, PageError, PageLifecycleController, PagePresenter, PageQuery, PageState,
    PostCard, PostDetail,
};
