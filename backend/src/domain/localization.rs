//! Locale primitives shared by path resolution and date formatting.
//!
//! Locale codes arrive from the active translation context as plain strings.
//! The domain never stores a "current locale"; every helper takes the code as
//! an explicit argument.

use std::fmt;

use chrono::Locale;

/// Locale code as supplied by the translation context (for example `pt-BR`).
pub type LocaleCode = String;

/// Locale rendered without a path prefix and used when formatting falls back.
pub const DEFAULT_LOCALE: &str = "pt-BR";

/// Locales with dedicated date formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SupportedLocale {
    /// Brazilian Portuguese.
    PtBr,
    /// American English.
    EnUs,
    /// British English.
    EnGb,
    /// Castilian Spanish.
    EsEs,
    /// French.
    FrFr,
    /// German.
    DeDe,
    /// Italian.
    ItIt,
}

impl SupportedLocale {
    /// Every supported locale, default first.
    pub const ALL: [Self; 7] = [
        Self::PtBr,
        Self::EnUs,
        Self::EnGb,
        Self::EsEs,
        Self::FrFr,
        Self::DeDe,
        Self::ItIt,
    ];

    /// Canonical BCP 47 code.
    pub const fn code(self) -> &'static str {
        match self {
            Self::PtBr => "pt-BR",
            Self::EnUs => "en-US",
            Self::EnGb => "en-GB",
            Self::EsEs => "es-ES",
            Self::FrFr => "fr-FR",
            Self::DeDe => "de-DE",
            Self::ItIt => "it-IT",
        }
    }

    /// Look up a locale code.
    ///
    /// Matching ignores case and accepts `_` in place of `-`. A bare language
    /// code (`pt`, `en`) or an unlisted region of a known language (`pt-PT`)
    /// selects the language's primary region.
    ///
    /// # Examples
    /// ```
    /// use blog_backend::domain::SupportedLocale;
    ///
    /// assert_eq!(SupportedLocale::lookup("en_gb"), Some(SupportedLocale::EnGb));
    /// assert_eq!(SupportedLocale::lookup("pt"), Some(SupportedLocale::PtBr));
    /// assert_eq!(SupportedLocale::lookup("tlh"), None);
    /// ```
    pub fn lookup(code: &str) -> Option<Self> {
        let normalized = code.trim().replace('_', "-").to_ascii_lowercase();
        if let Some(exact) = Self::ALL
            .into_iter()
            .find(|locale| locale.code().eq_ignore_ascii_case(&normalized))
        {
            return Some(exact);
        }

        let language = normalized
            .split_once('-')
            .map_or(normalized.as_str(), |(language, _)| language);
        match language {
            "pt" => Some(Self::PtBr),
            "en" => Some(Self::EnUs),
            "es" => Some(Self::EsEs),
            "fr" => Some(Self::FrFr),
            "de" => Some(Self::DeDe),
            "it" => Some(Self::ItIt),
            _ => None,
        }
    }

    /// Look up a locale code, falling back to [`DEFAULT_LOCALE`].
    pub fn negotiate(code: &str) -> Self {
        Self::lookup(code).unwrap_or(Self::PtBr)
    }

    pub(crate) const fn chrono_locale(self) -> Locale {
        match self {
            Self::PtBr => Locale::pt_BR,
            Self::EnUs => Locale::en_US,
            Self::EnGb => Locale::en_GB,
            Self::EsEs => Locale::es_ES,
            Self::FrFr => Locale::fr_FR,
            Self::DeDe => Locale::de_DE,
            Self::ItIt => Locale::it_IT,
        }
    }

    /// Long calendar-date pattern in chrono `strftime` syntax.
    pub(crate) const fn long_date_pattern(self) -> &'static str {
        match self {
            Self::PtBr | Self::EsEs => "%-d de %B de %Y",
            Self::EnUs => "%B %-d, %Y",
            Self::EnGb | Self::FrFr | Self::ItIt => "%-d %B %Y",
            Self::DeDe => "%-d. %B %Y",
        }
    }
}

impl fmt::Display for SupportedLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for locale lookup.

    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("pt-BR", SupportedLocale::PtBr)]
    #[case("PT-br", SupportedLocale::PtBr)]
    #[case("en_US", SupportedLocale::EnUs)]
    #[case("en-GB", SupportedLocale::EnGb)]
    #[case("de", SupportedLocale::DeDe)]
    #[case("pt-PT", SupportedLocale::PtBr)]
    #[case(" fr-FR ", SupportedLocale::FrFr)]
    fn lookup_matches_known_codes(#[case] code: &str, #[case] expected: SupportedLocale) {
        assert_eq!(SupportedLocale::lookup(code), Some(expected));
    }

    #[rstest]
    #[case("")]
    #[case("xx-YY")]
    #[case("klingon")]
    fn lookup_rejects_unknown_codes(#[case] code: &str) {
        assert_eq!(SupportedLocale::lookup(code), None);
    }

    #[test]
    fn negotiate_falls_back_to_default_locale() {
        let locale = SupportedLocale::negotiate("xx-YY");
        assert_eq!(locale.code(), DEFAULT_LOCALE);
    }

    #[test]
    fn every_code_round_trips_through_lookup() {
        for locale in SupportedLocale::ALL {
            assert_eq!(SupportedLocale::lookup(locale.code()), Some(locale));
        }
    }
}
