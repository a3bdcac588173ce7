//! Locale-aware link construction.
//!
//! Canonical paths are locale agnostic (`blog`, `blog/{slug}`,
//! `blog/topic/{slug}`). The default locale is served from the site root;
//! every other locale is served below `/{locale}`.

use super::localization::{DEFAULT_LOCALE, LocaleCode};

/// Canonical path of the landing page.
pub const HOME_PATH: &str = "/";

/// Canonical path of the post list.
pub const BLOG_INDEX_PATH: &str = "blog";

/// Canonical path of a single post.
pub fn post_path(slug: &str) -> String {
    format!("{BLOG_INDEX_PATH}/{slug}")
}

/// Canonical path of a category listing.
pub fn category_path(slug: &str) -> String {
    format!("{BLOG_INDEX_PATH}/topic/{slug}")
}

/// Maps canonical paths to locale-prefixed paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedPathResolver {
    default_locale: LocaleCode,
}

impl Default for LocalizedPathResolver {
    fn default() -> Self {
        Self::new(DEFAULT_LOCALE)
    }
}

impl LocalizedPathResolver {
    /// Create a resolver whose `default_locale` is rendered without a prefix.
    pub fn new(default_locale: impl Into<LocaleCode>) -> Self {
        Self {
            default_locale: default_locale.into(),
        }
    }

    /// Locale served without a path prefix.
    pub fn default_locale(&self) -> &str {
        self.default_locale.as_str()
    }

    /// Resolve `canonical_path` for `locale`.
    ///
    /// Leading slashes on the canonical path are ignored. Unknown locale codes
    /// are used verbatim as the prefix. Resolving an already localised path
    /// prefixes it again.
    ///
    /// # Examples
    /// ```
    /// use blog_backend::domain::LocalizedPathResolver;
    ///
    /// let paths = LocalizedPathResolver::new("pt-BR");
    /// assert_eq!(paths.resolve("blog/hello", "pt-BR"), "/blog/hello");
    /// assert_eq!(paths.resolve("blog/hello", "en"), "/en/blog/hello");
    /// assert_eq!(paths.resolve("/", "en"), "/en");
    /// ```
    pub fn resolve(&self, canonical_path: &str, locale: &str) -> String {
        let relative = canonical_path.trim_start_matches('/');
        let is_default = locale == self.default_locale;
        match (relative.is_empty(), is_default) {
            (true, true) => "/".to_owned(),
            (true, false) => format!("/{locale}"),
            (false, true) => format!("/{relative}"),
            (false, false) => format!("/{locale}/{relative}"),
        }
    }
}
