//! Cold start handling
//!
//! New users have no saved items, so there is no taste profile to score
//! against. Instead of returning an empty list, cold start ranks the
//! candidate pool purely by popularity so the first visit still shows a
//! usable shelf.

use crate::types::{ReasonKind, Recommendation, RecommendationCategory, RecommendationReason};
use crate::RecommenderConfig;
use screenscout_core::EnrichedItem;

/// Confidence attached to every cold-start recommendation
const COLD_START_CONFIDENCE: f32 = 0.8;

/// Popularity-ranked recommendations for users without history
pub struct ColdStartRanker;

impl ColdStartRanker {
    /// Rank candidates by popularity alone
    ///
    /// Candidates below the popularity floor are dropped as noise. Every
    /// result is tagged `trending` with a fixed confidence.
    pub fn execute(
        candidates: &[EnrichedItem],
        limit: usize,
        config: &RecommenderConfig,
    ) -> Vec<Recommendation> {
        let mut pool: Vec<&EnrichedItem> = candidates
            .iter()
            .filter(|c| c.item.popularity >= config.cold_start_popularity_floor)
            .collect();

        pool.sort_by(|a, b| {
            b.item
                .popularity
                .partial_cmp(&a.item.popularity)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        pool.truncate(limit);

        pool.into_iter()
            .map(|item| Recommendation {
                item: item.clone(),
                score: (item.item.popularity / config.popularity_norm).min(1.0),
                reasons: vec![RecommendationReason {
                    kind: ReasonKind::Popularity,
                    text: "Trending now".to_string(),
                    confidence: COLD_START_CONFIDENCE,
                }],
                category: RecommendationCategory::Trending,
            })
            .collect()
    }
}
