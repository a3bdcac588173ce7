//! Category icon lookup.
//!
//! Categories carry a symbolic icon name chosen by authors (for example
//! `BookOpen` or `book-open`). The renderer needs a glyph, so names resolve
//! through a closed table with an explicit fallback for names it does not
//! know.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Glyph rendered for icon names missing from the table.
pub const FALLBACK_GLYPH: &str = "\u{1F4C1}";

/// Icon attached to a category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryIcon {
    /// Source code.
    Code,
    /// Command line.
    Terminal,
    /// Hardware.
    Cpu,
    /// Data and storage.
    Database,
    /// Web and networking.
    Globe,
    /// Reading notes and tutorials.
    BookOpen,
    /// Ideas.
    Lightbulb,
    /// Personal notes.
    Coffee,
    /// Photography.
    Camera,
    /// Music.
    Music,
    /// Games.
    Gamepad,
    /// Career and work.
    Briefcase,
    /// Launches and projects.
    Rocket,
    /// Security.
    Shield,
    /// Any name outside the table; the original name is preserved.
    Other(String),
}

impl CategoryIcon {
    /// Resolve an icon name.
    ///
    /// Matching ignores case, `-`, `_`, and whitespace, so `BookOpen`,
    /// `book-open`, and `book_open` are the same icon.
    ///
    /// # Examples
    /// ```
    /// use blog_backend::domain::CategoryIcon;
    ///
    /// assert_eq!(CategoryIcon::from_name("book-open"), CategoryIcon::BookOpen);
    /// assert_eq!(
    ///     CategoryIcon::from_name("Sparkles"),
    ///     CategoryIcon::Other("Sparkles".to_owned())
    /// );
    /// ```
    pub fn from_name(name: &str) -> Self {
        let key: String = name
            .chars()
            .filter(|ch| !matches!(ch, '-' | '_') && !ch.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "code" | "code2" => Self::Code,
            "terminal" | "terminalsquare" => Self::Terminal,
            "cpu" => Self::Cpu,
            "database" => Self::Database,
            "globe" | "earth" => Self::Globe,
            "bookopen" | "book" => Self::BookOpen,
            "lightbulb" => Self::Lightbulb,
            "coffee" => Self::Coffee,
            "camera" => Self::Camera,
            "music" => Self::Music,
            "gamepad" | "gamepad2" => Self::Gamepad,
            "briefcase" => Self::Briefcase,
            "rocket" => Self::Rocket,
            "shield" | "shieldcheck" => Self::Shield,
            _ => Self::Other(name.trim().to_owned()),
        }
    }

    /// Canonical icon name.
    pub fn name(&self) -> &str {
        match self {
            Self::Code => "code",
            Self::Terminal => "terminal",
            Self::Cpu => "cpu",
            Self::Database => "database",
            Self::Globe => "globe",
            Self::BookOpen => "book-open",
            Self::Lightbulb => "lightbulb",
            Self::Coffee => "coffee",
            Self::Camera => "camera",
            Self::Music => "music",
            Self::Gamepad => "gamepad",
            Self::Briefcase => "briefcase",
            Self::Rocket => "rocket",
            Self::Shield => "shield",
            Self::Other(name) => name.as_str(),
        }
    }

    /// Glyph used by text renderers.
    pub const fn glyph(&self) -> &'static str {
        match self {
            Self::Code => "\u{1F4BB}",
            Self::Terminal => "\u{2328}",
            Self::Cpu => "\u{1F5A5}",
            Self::Database => "\u{1F5C4}",
            Self::Globe => "\u{1F310}",
            Self::BookOpen => "\u{1F4D6}",
            Self::Lightbulb => "\u{1F4A1}",
            Self::Coffee => "\u{2615}",
            Self::Camera => "\u{1F4F7}",
            Self::Music => "\u{1F3B5}",
            Self::Gamepad => "\u{1F3AE}",
            Self::Briefcase => "\u{1F4BC}",
            Self::Rocket => "\u{1F680}",
            Self::Shield => "\u{1F6E1}",
            Self::Other(_) => FALLBACK_GLYPH,
        }
    }

    /// Return `true` when the name fell through to the fallback.
    pub const fn is_fallback(&self) -> bool {
        matches!(self, Self::Other(_))
    }
}

impl fmt::Display for CategoryIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<String> for CategoryIcon {
    fn from(value: String) -> Self {
        Self::from_name(&value)
    }
}

impl From<CategoryIcon> for String {
    fn from(value: CategoryIcon) -> Self {
        value.name().to_owned()
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for icon name resolution.

    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Code", CategoryIcon::Code)]
    #[case("terminal", CategoryIcon::Terminal)]
    #[case("BookOpen", CategoryIcon::BookOpen)]
    #[case("book-open", CategoryIcon::BookOpen)]
    #[case("book_open", CategoryIcon::BookOpen)]
    #[case("Gamepad2", CategoryIcon::Gamepad)]
    #[case(" rocket ", CategoryIcon::Rocket)]
    fn resolves_known_names(#[case] name: &str, #[case] expected: CategoryIcon) {
        let icon = CategoryIcon::from_name(name);
        assert_eq!(icon, expected);
        assert!(!icon.is_fallback());
        assert_ne!(icon.glyph(), FALLBACK_GLYPH);
    }

    #[rstest]
    #[case("Sparkles")]
    #[case("")]
    fn unknown_names_fall_back(#[case] name: &str) {
        let icon = CategoryIcon::from_name(name);
        assert!(icon.is_fallback());
        assert_eq!(icon.glyph(), FALLBACK_GLYPH);
        assert_eq!(icon.name(), name);
    }

    #[test]
    fn canonical_names_resolve_to_themselves() {
        for icon in [
            CategoryIcon::Code,
            CategoryIcon::BookOpen,
            CategoryIcon::Shield,
            CategoryIcon::Gamepad,
        ] {
            assert_eq!(CategoryIcon::from_name(icon.name()), icon);
        }
    }

    #[test]
    fn serde_uses_the_icon_name() {
        let icon: CategoryIcon = serde_json::from_str("\"BookOpen\"").expect("icon decodes");
        assert_eq!(icon, CategoryIcon::BookOpen);
        let encoded = serde_json::to_string(&icon).expect("icon encodes");
        assert_eq!(encoded, "\"book-open\"");
    }
}
