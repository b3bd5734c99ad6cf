//! Catalog and rating models
//!
//! This module contains the data structures for representing catalog items
//! fetched from the primary provider, per-provider rating snapshots, and the
//! enriched records produced by the rating normalizer.

use crate::types::{ContentKind, DataSource};
use crate::models::watchlist::WatchlistKey;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A catalog record fetched from the primary provider
///
/// Immutable once parsed at the ingestion boundary. Optional fields are
/// genuinely optional upstream; consumers must tolerate their absence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CatalogItem {
    /// Provider-native numeric id
    pub id: i64,

    /// Content kind, set from the endpoint that produced the record
    pub kind: ContentKind,

    /// Display title
    #[validate(length(min = 1, max = 500))]
    pub title: String,

    /// Synopsis text
    pub overview: Option<String>,

    /// Poster image reference (provider-relative path)
    pub poster_path: Option<String>,

    /// Backdrop image reference (provider-relative path)
    pub backdrop_path: Option<String>,

    /// Release date as an ISO string; may be empty for unreleased items
    pub release_date: Option<String>,

    /// Popularity-independent average rating on the provider's 0-10 scale
    #[validate(range(min = 0.0, max = 10.0))]
    pub vote_average: f32,

    /// Number of votes behind `vote_average`
    pub vote_count: u32,

    /// Genre identifiers; unique, order irrelevant
    pub genre_ids: Vec<i32>,

    /// Popularity score on the provider's unbounded scale
    #[validate(range(min = 0.0))]
    pub popularity: f32,

    /// Original language (ISO 639-1 code)
    pub original_language: Option<String>,

    /// Top-billed cast names; populated when credits were fetched
    #[serde(default)]
    pub cast: Vec<String>,

    /// Director name; populated when credits were fetched
    pub director: Option<String>,

    /// Cross-provider id used for secondary-provider lookups
    pub imdb_id: Option<String>,
}

impl CatalogItem {
    /// Parse the release year from the leading `YYYY` of the release date
    ///
    /// Empty or malformed dates yield `None` rather than an error.
    pub fn release_year(&self) -> Option<i32> {
        self.release_date
            .as_deref()
            .and_then(|s| s.split('-').next())
            .and_then(|y| y.parse::<i32>().ok())
            .filter(|y| *y > 0)
    }

    /// Identity key shared with the watchlist store
    pub fn key(&self) -> WatchlistKey {
        WatchlistKey {
            id: self.id,
            kind: self.kind,
        }
    }
}

/// A single provider's rating in the common shape
///
/// `score` is on the provider's native scale; `out_of` records that scale so
/// consumers can rescale without knowing the source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProviderRating {
    pub score: f32,
    pub out_of: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub votes: Option<u64>,
}

impl ProviderRating {
    /// Rescale the score to the common 0-10 scale
    pub fn on_ten_scale(&self) -> f32 {
        if self.out_of > 0.0 {
            self.score / self.out_of * 10.0
        } else {
            0.0
        }
    }
}

/// Per-item rating snapshot across providers
///
/// Absence of a sub-rating means "provider has no data", never zero. Any
/// present sub-rating has a positive score; a reported score of exactly 0 is
/// dropped at normalization time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProviderRatings {
    /// Primary catalog provider rating (0-10)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<ProviderRating>,

    /// Secondary provider critic rating (0-10)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub critic: Option<ProviderRating>,

    /// Aggregator critics score (0-100)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub critics_aggregate: Option<ProviderRating>,

    /// Aggregator metascore (0-100)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metascore: Option<ProviderRating>,
}

impl ProviderRatings {
    /// True when no provider contributed any rating
    pub fn is_empty(&self) -> bool {
        self.catalog.is_none()
            && self.critic.is_none()
            && self.critics_aggregate.is_none()
            && self.metascore.is_none()
    }
}

/// A catalog item enriched with multi-provider rating data
///
/// Produced once per fetch+enrich cycle by the rating normalizer; never
/// mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedItem {
    #[serde(flatten)]
    pub item: CatalogItem,

    /// Rating snapshot, absent when no provider reported usable data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ratings: Option<ProviderRatings>,

    /// Weighted 0-10 composite across available providers; 0 when no ratings
    pub aggregated_score: f32,

    /// Which providers contributed to this record
    pub data_source: DataSource,
}

impl EnrichedItem {
    /// Identity key shared with the watchlist store
    pub fn key(&self) -> WatchlistKey {
        self.item.key()
    }

    /// Release year of the underlying catalog item
    pub fn release_year(&self) -> Option<i32> {
        self.item.release_year()
    }

    /// Best available rating for consumption: the composite when present,
    /// the catalog average otherwise
    pub fn effective_rating(&self) -> f32 {
        if self.aggregated_score > 0.0 {
            self.aggregated_score
        } else {
            self.item.vote_average
        }
    }
}
