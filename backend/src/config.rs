//! Blog content settings loaded via OrthoConfig.

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;
use tracing::warn;
use url::Url;

use crate::domain::{DEFAULT_LOCALE, SupportedLocale};

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Errors raised when settings cannot describe a usable content store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// No content store URL was configured.
    #[error("BLOG_CONTENT_URL is not set")]
    MissingContentUrl,
    /// The configured URL does not parse.
    #[error("content URL '{url}' is invalid: {message}")]
    InvalidContentUrl {
        /// Value as configured.
        url: String,
        /// Parser diagnostic.
        message: String,
    },
    /// The URL parses but is not http(s).
    #[error("content URL scheme '{scheme}' is not supported; use http or https")]
    UnsupportedScheme {
        /// Offending scheme.
        scheme: String,
    },
}

/// Configuration for reaching the content store and rendering pages.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "BLOG")]
pub struct BlogSettings {
    /// Base URL of the PostgREST project, e.g. `https://xyz.supabase.co`.
    pub content_url: Option<String>,
    /// Public API key sent with every store request.
    pub content_api_key: Option<String>,
    /// Locale whose routes carry no prefix.
    pub default_locale: Option<String>,
    /// Store request timeout in seconds.
    pub request_timeout_secs: Option<u64>,
}

impl BlogSettings {
    /// Return the configured default locale, falling back to `pt-BR`.
    ///
    /// Unsupported values fall back as well, with a warning.
    pub fn default_locale(&self) -> &str {
        self.default_locale
            .as_deref()
            .map_or(DEFAULT_LOCALE, |raw| {
                SupportedLocale::lookup(raw).map_or_else(
                    || {
                        warn!(locale = raw, "unsupported default locale; using pt-BR");
                        DEFAULT_LOCALE
                    },
                    SupportedLocale::code,
                )
            })
    }

    /// Return the store request timeout, falling back to 10 seconds.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(
            self.request_timeout_secs
                .filter(|secs| *secs > 0)
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
        )
    }

    /// Return the API key when one is configured and non-blank.
    pub fn content_api_key(&self) -> Option<&str> {
        self.content_api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    /// Parse and validate the content store base URL.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] when the URL is missing, malformed, or not
    /// http(s).
    pub fn content_url(&self) -> Result<Url, SettingsError> {
        let raw = self
            .content_url
            .as_deref()
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
            .ok_or(SettingsError::MissingContentUrl)?;
        let url = Url::parse(raw).map_err(|error| SettingsError::InvalidContentUrl {
            url: raw.to_owned(),
            message: error.to_string(),
        })?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            scheme => Err(SettingsError::UnsupportedScheme {
                scheme: scheme.to_owned(),
            }),
        }
    }
}
