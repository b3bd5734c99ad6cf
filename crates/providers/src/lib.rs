//! ScreenScout provider layer
//!
//! This crate wraps the two upstream content APIs (the catalog provider and
//! the ratings provider), caches their responses, keeps requests inside each
//! provider's rate limits, and merges heterogeneous rating scales into a
//! single comparable score via the rating normalizer.

pub mod catalog;
pub mod normalizer;
pub mod pipeline;
pub mod rate_limit;
pub mod ratings;

// Re-export main types
pub use catalog::CatalogClient;
pub use normalizer::{AggregationWeights, RatingNormalizer};
pub use pipeline::{EnrichmentPipeline, RatingsLookup};
pub use rate_limit::RateLimitManager;
pub use ratings::{RatingsClient, RatingsRecord, SourceRating};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Cached upstream response with provenance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderResponse {
    /// Response body
    pub data: Value,
    /// When the response was fetched
    pub fetched_at: DateTime<Utc>,
    /// Source API
    pub source: String,
}

/// Common error type for the provider layer
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Rate limit exceeded for {provider}")]
    RateLimitExceeded { provider: String },

    #[error("Malformed response from {provider}: {detail}")]
    MalformedResponse { provider: String, detail: String },

    #[error("No match found for {0}")]
    NoMatch(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl ProviderError {
    pub(crate) fn malformed(provider: &str, detail: impl Into<String>) -> Self {
        Self::MalformedResponse {
            provider: provider.to_string(),
            detail: detail.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ProviderError>;
