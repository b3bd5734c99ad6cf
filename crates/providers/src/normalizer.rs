//! Rating normalization and aggregation
//!
//! Converts each provider's native rating representation into the common
//! `ProviderRating` shape and computes a single 0-10 composite score via
//! fixed provider weights, renormalized over whichever sources are present.
//!
//! A score of exactly 0 from any provider is treated as "no data" rather than
//! "worst possible", the common convention upstream, though it can mask a
//! genuine zero rating. Kept deliberately; see DESIGN.md.

use crate::ratings::RatingsRecord;
use screenscout_core::{
    CatalogItem, DataSource, EnrichedItem, ProviderRating, ProviderRatings,
};
use serde::{Deserialize, Serialize};

/// Fixed per-provider aggregation weights
///
/// Renormalized at aggregation time so the weights of present sources sum
/// to 1; a single present source therefore contributes its full rescaled
/// score, not a scaled-down fraction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AggregationWeights {
    pub catalog: f32,
    pub critic: f32,
    pub critics_aggregate: f32,
    pub metascore: f32,
}

impl Default for AggregationWeights {
    fn default() -> Self {
        Self {
            catalog: 0.25,
            critic: 0.35,
            critics_aggregate: 0.25,
            metascore: 0.15,
        }
    }
}

/// Pure transformer from catalog items plus optional secondary records into
/// enriched items
#[derive(Debug, Clone, Default)]
pub struct RatingNormalizer {
    weights: AggregationWeights,
}

impl RatingNormalizer {
    pub fn new(weights: AggregationWeights) -> Self {
        Self { weights }
    }

    /// Enrich one catalog item with whatever rating data is available
    ///
    /// # Arguments
    /// * `item` - The catalog record
    /// * `secondary` - Raw secondary-provider record, when a lookup succeeded
    ///
    /// # Returns
    /// A new enriched item; this function never fails, unusable fields are
    /// simply omitted from the rating snapshot.
    pub fn normalize(&self, item: CatalogItem, secondary: Option<&RatingsRecord>) -> EnrichedItem {
        let usable_secondary = secondary.filter(|r| r.found());
        let ratings = build_ratings(&item, usable_secondary);
        let aggregated_score = self.aggregate(&ratings);

        let data_source = if usable_secondary.is_some() {
            DataSource::PrimarySecondary
        } else {
            DataSource::PrimaryOnly
        };

        EnrichedItem {
            item,
            ratings: if ratings.is_empty() {
                None
            } else {
                Some(ratings)
            },
            aggregated_score,
            data_source,
        }
    }

    /// Weighted composite over present sources, on the 0-10 scale
    fn aggregate(&self, ratings: &ProviderRatings) -> f32 {
        let mut score = 0.0f32;
        let mut weight_sum = 0.0f32;

        let sources = [
            (ratings.catalog, self.weights.catalog),
            (ratings.critic, self.weights.critic),
            (ratings.critics_aggregate, self.weights.critics_aggregate),
            (ratings.metascore, self.weights.metascore),
        ];

        for (rating, weight) in sources {
            if let Some(r) = rating {
                score += r.on_ten_scale() * weight;
                weight_sum += weight;
            }
        }

        if weight_sum > 0.0 {
            score / weight_sum
        } else {
            0.0
        }
    }
}

/// Build the rating snapshot from both providers
///
/// Zero scores are dropped here, applying the 0-means-absent convention in
/// one place for all sources.
fn build_ratings(item: &CatalogItem, secondary: Option<&RatingsRecord>) -> ProviderRatings {
    let mut ratings = ProviderRatings::default();

    if item.vote_average > 0.0 {
        ratings.catalog = Some(ProviderRating {
            score: item.vote_average,
            out_of: 10.0,
            votes: Some(item.vote_count as u64),
        });
    }

    let Some(record) = secondary else {
        return ratings;
    };

    if let Some(score) = record.imdb_rating.as_deref().and_then(parse_score) {
        ratings.critic = Some(ProviderRating {
            score,
            out_of: 10.0,
            votes: record.imdb_votes.as_deref().and_then(parse_votes),
        });
    }

    if let Some(score) = record.source_value("Rotten Tomatoes").and_then(parse_score) {
        ratings.critics_aggregate = Some(ProviderRating {
            score,
            out_of: 100.0,
            votes: None,
        });
    }

    let metascore = record
        .metascore
        .as_deref()
        .and_then(parse_score)
        .or_else(|| record.source_value("Metacritic").and_then(parse_score));
    if let Some(score) = metascore {
        ratings.metascore = Some(ProviderRating {
            score,
            out_of: 100.0,
            votes: None,
        });
    }

    ratings
}

/// Parse a provider score string defensively
///
/// Accepts plain numbers (`"8.8"`), percentages (`"81%"`), and fractions
/// (`"67/100"`, numerator taken). `"N/A"`, empty, unparsable, and
/// non-positive values all yield `None`.
pub fn parse_score(raw: &str) -> Option<f32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("n/a") {
        return None;
    }

    let number = trimmed
        .strip_suffix('%')
        .unwrap_or(trimmed)
        .split('/')
        .next()?;

    number.trim().parse::<f32>().ok().filter(|s| *s > 0.0)
}

/// Parse a vote-count string with thousands separators
pub fn parse_votes(raw: &str) -> Option<u64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("n/a") {
        return None;
    }

    trimmed.replace(',', "").parse::<u64>().ok()
}
