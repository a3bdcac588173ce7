//! Human-readable publication dates.

use chrono::{DateTime, Utc};

use super::localization::SupportedLocale;

/// Format the UTC calendar date of `timestamp` for `locale`.
///
/// Unknown locale codes fall back to the default locale's pattern. No
/// process-wide locale state is consulted.
///
/// # Examples
/// ```
/// use blog_backend::domain::format_date;
/// use chrono::{TimeZone, Utc};
///
/// let instant = Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).single().expect("valid time");
/// assert_eq!(format_date(instant, "en-US"), "March 15, 2024");
/// ```
pub fn format_date(timestamp: DateTime<Utc>, locale: &str) -> String {
    let locale = SupportedLocale::negotiate(locale);
    timestamp
        .format_localized(locale.long_date_pattern(), locale.chrono_locale())
        .to_string()
}

#[cfg(test)]
mod tests {
    //! Unit tests for localized date formatting.

    use super::*;
    use chrono::TimeZone;
    use rstest::{fixture, rstest};

    #[fixture]
    fn ides_of_march() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0)
            .single()
            .expect("valid timestamp")
    }

    #[rstest]
    #[case("en-US", "March 15, 2024")]
    #[case("pt-BR", "15 de março de 2024")]
    #[case("en-GB", "15 March 2024")]
    #[case("pt", "15 de março de 2024")]
    fn formats_long_dates(
        ides_of_march: DateTime<Utc>,
        #[case] locale: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(format_date(ides_of_march, locale), expected);
    }

    #[rstest]
    fn locales_render_the_same_instant_differently(ides_of_march: DateTime<Utc>) {
        let brazilian = format_date(ides_of_march, "pt-BR");
        let american = format_date(ides_of_march, "en-US");

        assert_ne!(brazilian, american);
        for rendered in [&brazilian, &american] {
            assert!(rendered.contains("15"), "{rendered} should carry the day");
            assert!(rendered.contains("2024"), "{rendered} should carry the year");
        }
    }

    #[rstest]
    fn unknown_locale_uses_default_pattern(ides_of_march: DateTime<Utc>) {
        assert_eq!(
            format_date(ides_of_march, "xx-unknown"),
            format_date(ides_of_march, "pt-BR")
        );
    }

    #[test]
    fn formatting_uses_the_utc_calendar_date() {
        let late_evening = Utc
            .with_ymd_and_hms(2024, 1, 1, 23, 59, 59)
            .single()
            .expect("valid timestamp");
        assert_eq!(format_date(late_evening, "en-US"), "January 1, 2024");
    }
}
