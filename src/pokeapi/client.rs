//! PokeAPI HTTP client
//!
//! Every fetch consults the expiring cache first, keyed by the full
//! request URL. On a miss the raw response body is cached before being
//! deserialized, so a later hit replays exactly the bytes the API sent.

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::cache::ExpiringCache;
use crate::config::Config;
use crate::error::Result;
use crate::models::{LocationArea, LocationAreaPage, Pokemon};

// == Client ==
/// PokeAPI client with an injected response cache.
///
/// The cache handle is passed in at construction rather than reached
/// for globally, so tests can give each client its own instance.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    cache: ExpiringCache,
    base_url: String,
}

impl Client {
    // == Constructor ==
    /// Creates a client from configuration, taking ownership of the
    /// cache handle it will consult on every fetch.
    ///
    /// # Errors
    /// Fails only if the underlying HTTP client cannot be built.
    pub fn new(config: &Config, cache: ExpiringCache) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            cache,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    // == List Location Areas ==
    /// Fetches one page of the location-area index.
    ///
    /// `page_url` is the `next`/`previous` URL taken from an earlier
    /// page; `None` fetches the first page.
    pub async fn list_location_areas(&self, page_url: Option<&str>) -> Result<LocationAreaPage> {
        let url = match page_url {
            Some(url) => url.to_string(),
            None => format!("{}/location-area?offset=0&limit=20", self.base_url),
        };
        self.get_json(&url).await
    }

    // == Get Location Area ==
    /// Fetches a single location area by name.
    pub async fn get_location_area(&self, name: &str) -> Result<LocationArea> {
        let url = format!("{}/location-area/{}", self.base_url, name);
        self.get_json(&url).await
    }

    // == Get Pokemon ==
    /// Fetches a Pokemon by name.
    pub async fn get_pokemon(&self, name: &str) -> Result<Pokemon> {
        let url = format!("{}/pokemon/{}", self.base_url, name);
        self.get_json(&url).await
    }

    // == Cache-Through Fetch ==
    /// Serves the cached body for `url` when it is still fresh;
    /// otherwise performs the GET, caches the raw bytes, and then
    /// deserializes. Error responses are never cached.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        if let Some(body) = self.cache.get(url).await {
            debug!("cache hit for {}", url);
            return Ok(serde_json::from_slice(&body)?);
        }

        debug!("cache miss for {}, fetching", url);
        let response = self.http.get(url).send().await?.error_for_status()?;
        let body = response.bytes().await?;

        self.cache.add(url, body.to_vec()).await;
        Ok(serde_json::from_slice(&body)?)
    }
}
