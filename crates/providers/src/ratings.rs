//! Ratings provider API client
//!
//! Secondary source of critic and audience ratings. The upstream API returns
//! string-typed numeric fields and uses the sentinel `"N/A"` for missing
//! values; records are passed through raw and interpreted by the rating
//! normalizer. Rate limit upstream: 1000 requests per day, so responses are
//! cached for 24 hours.

use crate::{ProviderError, ProviderResponse, Result};
use chrono::Utc;
use moka::future::Cache;
use reqwest::Client;
use screenscout_core::config::{CacheConfig, ProviderConfig};
use screenscout_core::ContentKind;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// One source entry from the ratings provider's `Ratings` array
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRating {
    #[serde(rename = "Source")]
    pub source: String,
    #[serde(rename = "Value")]
    pub value: String,
}

/// Raw ratings record as returned by the provider
///
/// All numeric fields are strings on the wire; `"N/A"` means absent. Nothing
/// here is parsed or validated beyond the JSON shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RatingsRecord {
    #[serde(rename = "Title", default)]
    pub title: Option<String>,

    #[serde(rename = "imdbRating", default)]
    pub imdb_rating: Option<String>,

    #[serde(rename = "imdbVotes", default)]
    pub imdb_votes: Option<String>,

    #[serde(rename = "Metascore", default)]
    pub metascore: Option<String>,

    #[serde(rename = "Ratings", default)]
    pub ratings: Vec<SourceRating>,

    /// `"True"` on a match, `"False"` when the provider has no record
    #[serde(rename = "Response", default)]
    pub response: String,
}

impl RatingsRecord {
    /// Whether the provider actually matched a title
    pub fn found(&self) -> bool {
        self.response.eq_ignore_ascii_case("true")
    }

    /// Value of the first `Ratings` entry whose source contains `name`
    pub fn source_value(&self, name: &str) -> Option<&str> {
        self.ratings
            .iter()
            .find(|r| r.source.contains(name))
            .map(|r| r.value.as_str())
    }
}

/// Ratings provider API client
pub struct RatingsClient {
    client: Client,
    api_key: String,
    base_url: String,
    cache: Cache<String, ProviderResponse>,
}

impl RatingsClient {
    /// Create a new ratings client
    ///
    /// # Arguments
    /// * `config` - Provider credentials and base URLs
    /// * `cache` - Cache TTL and capacity settings
    pub fn new(config: &ProviderConfig, cache: &CacheConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(cache.max_capacity)
            .time_to_live(cache.ratings_ttl)
            .build();

        Self {
            client: Client::new(),
            api_key: config.ratings_api_key.clone(),
            base_url: config.ratings_base_url.clone(),
            cache,
        }
    }

    /// Look up a record by cross-provider id
    ///
    /// # Arguments
    /// * `imdb_id` - Cross-provider title id (e.g. `tt0137523`)
    ///
    /// # Returns
    /// The raw record; `found()` is false when the provider has no match
    pub async fn lookup_by_imdb(&self, imdb_id: &str) -> Result<RatingsRecord> {
        let cache_key = format!("imdb:{}", imdb_id);
        let url = format!(
            "{}/?apikey={}&i={}",
            self.base_url,
            self.api_key,
            urlencoding::encode(imdb_id)
        );

        let data = self.fetch_cached(cache_key, url).await?;
        parse_record(&data)
    }

    /// Look up a record by title, year, and kind
    ///
    /// # Arguments
    /// * `title` - Exact title to look up
    /// * `year` - Release year, if known
    /// * `kind` - Content kind; mapped to the provider's type parameter
    pub async fn lookup_by_title(
        &self,
        title: &str,
        year: Option<i32>,
        kind: ContentKind,
    ) -> Result<RatingsRecord> {
        let cache_key = format!("title:{}:{:?}:{}", title, year, kind);
        let mut url = format!(
            "{}/?apikey={}&t={}&type={}",
            self.base_url,
            self.api_key,
            urlencoding::encode(title),
            kind.ratings_type()
        );

        if let Some(y) = year {
            url.push_str(&format!("&y={}", y));
        }

        let data = self.fetch_cached(cache_key, url).await?;
        parse_record(&data)
    }

    /// Fetch a URL through the response cache
    async fn fetch_cached(&self, cache_key: String, url: String) -> Result<Value> {
        if let Some(cached) = self.cache.get(&cache_key).await {
            debug!(key = %cache_key, "ratings cache hit");
            return Ok(cached.data);
        }

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(ProviderError::HttpError(
                response.error_for_status().unwrap_err(),
            ));
        }

        let data: Value = response.json().await?;
        self.cache
            .insert(
                cache_key,
                ProviderResponse {
                    data: data.clone(),
                    fetched_at: Utc::now(),
                    source: "ratings".to_string(),
                },
            )
            .await;

        Ok(data)
    }
}

fn parse_record(data: &Value) -> Result<RatingsRecord> {
    serde_json::from_value(data.clone())
        .map_err(|e| ProviderError::malformed("ratings", e.to_string()))
}
