//! Catalog provider API client
//!
//! Primary source of title metadata: search, trending, discovery, and
//! per-title details with credits. Rate limit upstream: 40 requests per
//! 10 seconds; responses are cached for several hours (configurable).

use crate::{ProviderError, ProviderResponse, Result};
use chrono::Utc;
use moka::future::Cache;
use reqwest::Client;
use screenscout_core::config::{CacheConfig, ProviderConfig};
use screenscout_core::{CatalogItem, ContentKind};
use serde_json::Value;
use tracing::debug;
use validator::Validate;

/// Catalog provider API client
pub struct CatalogClient {
    client: Client,
    api_key: String,
    base_url: String,
    cache: Cache<String, ProviderResponse>,
}

impl CatalogClient {
    /// Create a new catalog client
    ///
    /// # Arguments
    /// * `config` - Provider credentials and base URLs
    /// * `cache` - Cache TTL and capacity settings
    pub fn new(config: &ProviderConfig, cache: &CacheConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(cache.max_capacity)
            .time_to_live(cache.catalog_ttl)
            .build();

        Self {
            client: Client::new(),
            api_key: config.catalog_api_key.clone(),
            base_url: config.catalog_base_url.clone(),
            cache,
        }
    }

    /// Search for titles of one kind
    ///
    /// # Arguments
    /// * `query` - Title text to search for
    /// * `kind` - Content kind; determines the endpoint, never inferred
    /// * `page` - 1-based result page
    ///
    /// # Returns
    /// Matching catalog items; records missing required fields are skipped
    pub async fn search(
        &self,
        query: &str,
        kind: ContentKind,
        page: u32,
    ) -> Result<Vec<CatalogItem>> {
        let cache_key = format!("search:{}:{}:{}", kind, query, page);
        let url = format!(
            "{}/search/{}?api_key={}&query={}&page={}",
            self.base_url,
            kind.catalog_path(),
            self.api_key,
            urlencoding::encode(query),
            page
        );

        let data = self.fetch_cached(cache_key, url).await?;
        self.parse_list(&data, kind)
    }

    /// Get the weekly trending list for one kind
    pub async fn trending(&self, kind: ContentKind) -> Result<Vec<CatalogItem>> {
        let cache_key = format!("trending:{}", kind);
        let url = format!(
            "{}/trending/{}/week?api_key={}",
            self.base_url,
            kind.catalog_path(),
            self.api_key
        );

        let data = self.fetch_cached(cache_key, url).await?;
        self.parse_list(&data, kind)
    }

    /// Discover titles of one kind filtered by genre
    ///
    /// # Arguments
    /// * `kind` - Content kind
    /// * `genre_id` - Catalog genre id to filter on
    /// * `page` - 1-based result page
    pub async fn discover(
        &self,
        kind: ContentKind,
        genre_id: i32,
        page: u32,
    ) -> Result<Vec<CatalogItem>> {
        let cache_key = format!("discover:{}:{}:{}", kind, genre_id, page);
        let url = format!(
            "{}/discover/{}?api_key={}&with_genres={}&sort_by=popularity.desc&page={}",
            self.base_url,
            kind.catalog_path(),
            self.api_key,
            genre_id,
            page
        );

        let data = self.fetch_cached(cache_key, url).await?;
        self.parse_list(&data, kind)
    }

    /// Get full details for one title, including credits and external ids
    ///
    /// # Arguments
    /// * `id` - Catalog title id
    /// * `kind` - Content kind
    pub async fn details(&self, id: i64, kind: ContentKind) -> Result<CatalogItem> {
        let cache_key = format!("details:{}:{}", kind, id);
        let url = format!(
            "{}/{}/{}?api_key={}&append_to_response=credits,external_ids",
            self.base_url,
            kind.catalog_path(),
            id,
            self.api_key
        );

        let data = self.fetch_cached(cache_key, url).await?;
        parse_details(&data, kind)
    }

    /// Fetch a URL through the response cache
    async fn fetch_cached(&self, cache_key: String, url: String) -> Result<Value> {
        if let Some(cached) = self.cache.get(&cache_key).await {
            debug!(key = %cache_key, "catalog cache hit");
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
                    source: "catalog".to_string(),
                },
            )
            .await;

        Ok(data)
    }

    /// Parse a list response
    fn parse_list(&self, data: &Value, kind: ContentKind) -> Result<Vec<CatalogItem>> {
        let results = data
            .get("results")
            .and_then(|v| v.as_array())
            .ok_or_else(|| ProviderError::malformed("catalog", "no results array in response"))?;

        Ok(results
            .iter()
            .filter_map(|item| parse_list_item(item, kind).ok())
            .collect())
    }
}

/// Parse one list entry
///
/// Missing id or title makes the record unusable; every other field degrades
/// to a neutral default.
fn parse_list_item(item: &Value, kind: ContentKind) -> Result<CatalogItem> {
    let id = item
        .get("id")
        .and_then(|v| v.as_i64())
        .ok_or_else(|| ProviderError::malformed("catalog", "missing id"))?;

    let (title_field, date_field) = match kind {
        ContentKind::Movie => ("title", "release_date"),
        ContentKind::Tv => ("name", "first_air_date"),
    };

    let title = item
        .get(title_field)
        .and_then(|v| v.as_str())
        .ok_or_else(|| ProviderError::malformed("catalog", "missing title"))?
        .to_string();

    let parsed = CatalogItem {
        id,
        kind,
        title,
        overview: string_field(item, "overview"),
        poster_path: string_field(item, "poster_path"),
        backdrop_path: string_field(item, "backdrop_path"),
        release_date: string_field(item, date_field),
        vote_average: float_field(item, "vote_average"),
        vote_count: item
            .get("vote_count")
            .and_then(|v| v.as_u64())
            .unwrap_or(0) as u32,
        genre_ids: item
            .get("genre_ids")
            .and_then(|v| v.as_array())
            .map(|arr| arr.iter().filter_map(|g| g.as_i64().map(|i| i as i32)).collect())
            .unwrap_or_default(),
        popularity: float_field(item, "popularity"),
        original_language: string_field(item, "original_language"),
        cast: Vec::new(),
        director: None,
        imdb_id: None,
    };

    parsed
        .validate()
        .map_err(|e| ProviderError::malformed("catalog", e.to_string()))?;

    Ok(parsed)
}

/// Parse a details response, which carries genre objects and credits instead
/// of the list shape
fn parse_details(data: &Value, kind: ContentKind) -> Result<CatalogItem> {
    let mut item = parse_list_item(data, kind)?;

    // Details responses use genre objects rather than genre_ids
    if item.genre_ids.is_empty() {
        item.genre_ids = data
            .get("genres")
            .and_then(|v| v.as_array())
            .map(|arr| {
                arr.iter()
                    .filter_map(|g| g.get("id").and_then(|i| i.as_i64()).map(|i| i as i32))
                    .collect()
            })
            .unwrap_or_default();
    }

    if let Some(credits) = data.get("credits") {
        item.cast = credits
            .get("cast")
            .and_then(|v| v.as_array())
            .map(|arr| {
                arr.iter()
                    .filter_map(|c| c.get("name").and_then(|n| n.as_str()))
                    .take(10)
                    .map(|s| s.to_string())
                    .collect()
            })
            .unwrap_or_default();

        item.director = credits
            .get("crew")
            .and_then(|v| v.as_array())
            .and_then(|arr| {
                arr.iter().find(|c| {
                    c.get("job").and_then(|j| j.as_str()) == Some("Director")
                })
            })
            .and_then(|c| c.get("name").and_then(|n| n.as_str()))
            .map(|s| s.to_string());
    }

    item.imdb_id = data
        .get("imdb_id")
        .and_then(|v| v.as_str())
        .or_else(|| {
            data.get("external_ids")
                .and_then(|e| e.get("imdb_id"))
                .and_then(|v| v.as_str())
        })
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string());

    Ok(item)
}

fn string_field(item: &Value, field: &str) -> Option<String> {
    item.get(field)
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
}

fn float_field(item: &Value, field: &str) -> f32 {
    item.get(field).and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
}
