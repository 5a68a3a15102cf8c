// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the image-search API.
//!
//! One call to [`SearchClient::fetch_images`] issues exactly one GET request.
//! There are no retries and no timeout beyond the transport defaults; every
//! failure is surfaced immediately as a [`SearchRequestError`].

mod wire;

pub use wire::decode_search_page;

use crate::domain::search::{Page, SearchPage, SearchQuery};
use crate::error::SearchRequestError;
use reqwest::Url;

/// Default endpoint of the public Pixabay API.
pub const DEFAULT_BASE_URL: &str = "https://pixabay.com/api/";

/// Default number of results requested per page.
pub const DEFAULT_PER_PAGE: u32 = 12;

/// Bounds accepted by the API for `per_page`.
pub const MIN_PER_PAGE: u32 = 3;
pub const MAX_PER_PAGE: u32 = 200;

const USER_AGENT: &str = concat!("IcedGallery/", env!("CARGO_PKG_VERSION"));

/// Endpoint, credentials and fixed query parameters.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiSettings {
    pub base_url: String,
    pub api_key: String,
    pub per_page: u32,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: String::new(),
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl std::fmt::Debug for ApiSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiSettings")
            .field("base_url", &self.base_url)
            .field("api_key", &if self.has_key() { "<redacted>" } else { "<unset>" })
            .field("per_page", &self.per_page)
            .finish()
    }
}

impl ApiSettings {
    /// Returns whether an API key has been configured.
    #[must_use]
    pub fn has_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

/// Cloneable handle to the search API; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct SearchClient {
    http: reqwest::Client,
    settings: ApiSettings,
}

impl SearchClient {
    /// Creates a client for the given settings.
    ///
    /// `per_page` is clamped to the range the API accepts.
    #[must_use]
    pub fn new(mut settings: ApiSettings) -> Self {
        settings.per_page = settings.per_page.clamp(MIN_PER_PAGE, MAX_PER_PAGE);

        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_else(|err| {
                tracing::warn!(error = %err, "failed to configure HTTP client; using defaults");
                reqwest::Client::default()
            });

        Self { http, settings }
    }

    #[must_use]
    pub fn settings(&self) -> &ApiSettings {
        &self.settings
    }

    /// Builds the request URL for one page of a query.
    pub fn search_url(&self, query: &SearchQuery, page: Page) -> Result<Url, SearchRequestError> {
        let page = page.value().to_string();
        let per_page = self.settings.per_page.to_string();
        let params = [
            ("key", self.settings.api_key.as_str()),
            ("q", query.as_str()),
            ("page", page.as_str()),
            ("per_page", per_page.as_str()),
            ("image_type", "photo"),
            ("orientation", "horizontal"),
        ];

        Url::parse_with_params(&self.settings.base_url, params)
            .map_err(|e| SearchRequestError::new(format!("Invalid API base URL: {e}")))
    }

    /// Fetches one page of results for `query`.
    pub async fn fetch_images(
        &self,
        query: &SearchQuery,
        page: Page,
    ) -> Result<SearchPage, SearchRequestError> {
        let url = self.search_url(query, page)?;
        tracing::debug!(query = %query, page = page.value(), "requesting search page");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SearchRequestError::from_status(status.as_u16()));
        }

        let body = response.bytes().await?;
        decode_search_page(&body)
    }

    /// Downloads the raw bytes of an image (thumbnail or full size).
    pub async fn fetch_image_bytes(&self, url: &str) -> Result<Vec<u8>, SearchRequestError> {
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SearchRequestError::from_status(status.as_u16()));
        }

        Ok(response.bytes().await?.to_vec())
    }
}
