//! Reqwest-backed PostgREST content store.
//!
//! This adapter owns transport details only: query-string construction,
//! headers, timeout and HTTP error mapping, and JSON decoding into store
//! records. List bodies are decoded row by row so one malformed row is
//! skipped instead of failing the whole page.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use thiserror::Error;
use serde_json::Value;
use tracing::{debug, warn};

use super::dto::{CategoryRowDto, PostRowDto};
use crate::domain::ports::{CategoryRecord, ContentStore, ContentStoreError, PostRecord};

const REST_PREFIX: &str = "rest/v1/";
const POSTS_TABLE: &str = "posts";
const CATEGORIES_TABLE: &str = "categories";
const POST_SELECT: &str = "*,categories(slug,icon)";

type QueryPairs = Vec<(&'static str, String)>;
type RowDecoder<T> = fn(&[u8]) -> Result<Vec<T>, ContentStoreError>;

/// Errors raised while constructing the adapter.
#[derive(Debug, Error)]
pub enum PostgrestSetupError {
    /// The reqwest client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
    /// The table endpoint could not be derived from the base URL.
    #[error("invalid content store URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Content store adapter issuing GET requests against PostgREST tables.
pub struct PostgrestContentStore {
    client: Client,
    posts_endpoint: Url,
    categories_endpoint: Url,
    api_key: Option<String>,
}

impl PostgrestContentStore {
    /// Build an adapter for the project at `base` with a request timeout.
    ///
    /// ```rust,ignore
    /// let store = PostgrestContentStore::new(base, Duration::from_secs(10))?;
    /// ```
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed or the
    /// table endpoints cannot be derived from `base`.
    pub fn new(base: Url, timeout: Duration) -> Result<Self, PostgrestSetupError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            posts_endpoint: table_endpoint(&base, POSTS_TABLE)?,
            categories_endpoint: table_endpoint(&base, CATEGORIES_TABLE)?,
            api_key: None,
        })
    }

    /// Send `key` as `apikey` and bearer token on every request.
    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    async fn fetch<T>(
        &self,
        endpoint: &Url,
        query: &QueryPairs,
        decode: RowDecoder<T>,
    ) -> Result<Vec<T>, ContentStoreError>
    where
        T: DeserializeOwned,
    {
        let mut request = self
            .client
            .get(endpoint.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .query(query);
        if let Some(key) = self.api_key.as_deref() {
            request = request.header("apikey", key).bearer_auth(key);
        }

        let response = request.send().await.map_err(map_transport_error)?;
        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        let rows = decode(body.as_ref())?;
        debug!(
            endpoint = endpoint.path(),
            rows = rows.len(),
            bytes = body.len(),
            "content store query succeeded"
        );
        Ok(rows)
    }
}

#[async_trait]
impl ContentStore for PostgrestContentStore {
    async fn select_posts(
        &self,
        category_id: Option<i64>,
    ) -> Result<Vec<PostRecord>, ContentStoreError> {
        let rows: Vec<PostRowDto> = self
            .fetch(
                &self.posts_endpoint,
                &posts_query(category_id),
                decode_listed_rows::<PostRowDto>,
            )
            .await?;
        Ok(rows.into_iter().map(PostRowDto::into_record).collect())
    }

    async fn select_post_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<PostRecord>, ContentStoreError> {
        let rows: Vec<PostRowDto> = self
            .fetch(
                &self.posts_endpoint,
                &post_by_slug_query(slug),
                decode_rows::<PostRowDto>,
            )
            .await?;
        Ok(rows.into_iter().next().map(PostRowDto::into_record))
    }

    async fn select_category_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<CategoryRecord>, ContentStoreError> {
        let rows: Vec<CategoryRowDto> = self
            .fetch(
                &self.categories_endpoint,
                &category_by_slug_query(slug),
                decode_rows::<CategoryRowDto>,
            )
            .await?;
        Ok(rows.into_iter().next().map(CategoryRowDto::into_record))
    }
}

fn table_endpoint(base: &Url, table: &str) -> Result<Url, url::ParseError> {
    let mut root = base.clone();
    if !root.path().ends_with('/') {
        let path = format!("{}/", root.path());
        root.set_path(&path);
    }
    root.join(REST_PREFIX)?.join(table)
}

fn posts_query(category_id: Option<i64>) -> QueryPairs {
    let mut query = vec![
        ("select", POST_SELECT.to_owned()),
        ("order", "created_at.desc".to_owned()),
    ];
    if let Some(id) = category_id {
        query.push(("category_id", format!("eq.{id}")));
    }
    query
}

fn post_by_slug_query(slug: &str) -> QueryPairs {
    vec![
        ("select", POST_SELECT.to_owned()),
        ("slug", format!("eq.{slug}")),
        ("limit", "1".to_owned()),
    ]
}

fn category_by_slug_query(slug: &str) -> QueryPairs {
    vec![
        ("select", "*".to_owned()),
        ("slug", format!("eq.{slug}")),
        ("limit", "1".to_owned()),
    ]
}

fn decode_rows<T>(body: &[u8]) -> Result<Vec<T>, ContentStoreError>
where
    T: DeserializeOwned,
{
    serde_json::from_slice(body).map_err(|error| {
        ContentStoreError::decode(format!("invalid PostgREST JSON payload: {error}"))
    })
}

/// Decode a list body, skipping rows that do not match `T`.
///
/// A body that is not a JSON array still fails as a whole.
fn decode_listed_rows<T>(body: &[u8]) -> Result<Vec<T>, ContentStoreError>
where
    T: DeserializeOwned,
{
    let rows: Vec<Value> = decode_rows(body)?;
    Ok(rows
        .into_iter()
        .enumerate()
        .filter_map(|(index, row)| {
            serde_json::from_value(row)
                .inspect_err(|error| {
                    warn!(row = index, error = %error, "skipping undecodable content row");
                })
                .ok()
        })
        .collect())
}

fn map_transport_error(error: reqwest::Error) -> ContentStoreError {
    if error.is_timeout() {
        ContentStoreError::timeout(error.to_string())
    } else {
        ContentStoreError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> ContentStoreError {
    let body_preview = body_preview(body);
    let message = if body_preview.is_empty() {
        format!("status {}", status.as_u16())
    } else {
        format!("status {}: {}", status.as_u16(), body_preview)
    };

    match status {
        StatusCode::TOO_MANY_REQUESTS => ContentStoreError::rate_limited(message),
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            ContentStoreError::timeout(message)
        }
        _ if status.is_client_error() => ContentStoreError::rejected(message),
        _ => ContentStoreError::transport(message),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
