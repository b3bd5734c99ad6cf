//! Recommendation ranking
//!
//! Orchestrates scoring across a candidate pool: deduplicates against the
//! saved list, applies the minimum-score cutoff, sorts, assigns each
//! survivor one category, and truncates to the requested limit. Two mutually
//! exclusive modes, decided once per call from the saved-list size:
//!
//! - cold start (no saved items): popularity ranking, everything `trending`
//! - personalized (>= 1 saved item): profile-based scoring via the
//!   candidate scorer
//!
//! Malformed candidates are never rejected; missing dimensions simply score
//! 0, favoring completeness of output over strictness.

use crate::cold_start::ColdStartRanker;
use crate::profile::BuildPreferences;
use crate::scoring::CandidateScorer;
use crate::types::{
    ReasonKind, Recommendation, RecommendationCategory, ScoredCandidate,
};
use crate::RecommenderConfig;
use screenscout_core::{
    EnrichedItem, PaginatedResponse, PaginationParams, SavedItem, WatchlistKey,
};
use std::collections::HashSet;
use tracing::debug;

/// Ranks candidate pools into categorized recommendation lists
#[derive(Debug, Clone)]
pub struct RecommendationRanker {
    config: RecommenderConfig,
    scorer: CandidateScorer,
}

impl RecommendationRanker {
    pub fn new(config: RecommenderConfig) -> Self {
        let scorer = CandidateScorer::new(config.clone());
        Self { config, scorer }
    }

    /// Rank a candidate pool against the user's saved list
    ///
    /// # Arguments
    /// * `candidates` - Pool of enriched items to evaluate
    /// * `saved` - Watchlist snapshot; also the dedup reference
    /// * `current_year` - Injected calendar year for the taste profile
    /// * `limit` - Maximum number of recommendations returned
    ///
    /// # Returns
    /// Recommendations sorted by descending score (cold start: descending
    /// popularity), each scoring at least the configured cutoff and none
    /// matching a saved item's `(id, kind)` key.
    pub fn rank(
        &self,
        candidates: &[EnrichedItem],
        saved: &[SavedItem],
        current_year: i32,
        limit: usize,
    ) -> Vec<Recommendation> {
        let Some(prefs) = BuildPreferences::execute(saved, current_year, &self.config) else {
            debug!("no saved items, serving cold-start ranking");
            return ColdStartRanker::execute(candidates, limit, &self.config);
        };

        let saved_keys: HashSet<WatchlistKey> = saved.iter().map(|s| s.key()).collect();

        let mut ranked: Vec<Recommendation> = candidates
            .iter()
            .filter(|c| !saved_keys.contains(&c.key()))
            .filter_map(|candidate| {
                let scored = self.scorer.score(candidate, &prefs);
                if scored.score < self.config.min_score {
                    return None;
                }

                let category = self.categorize(candidate, &scored);
                Some(Recommendation {
                    item: candidate.clone(),
                    score: scored.score,
                    reasons: scored.reasons,
                    category,
                })
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        ranked.truncate(limit);

        debug!(results = ranked.len(), "personalized ranking complete");
        ranked
    }

    /// Assign exactly one category to a scored candidate
    ///
    /// Priority: genre match, then highly rated, then trending; similar
    /// taste is the always-applicable fallback.
    fn categorize(
        &self,
        candidate: &EnrichedItem,
        scored: &ScoredCandidate,
    ) -> RecommendationCategory {
        let strong_genre = scored.reasons.iter().any(|r| {
            r.kind == ReasonKind::Genre && r.confidence > self.config.genre_category_confidence
        });
        if strong_genre {
            return RecommendationCategory::GenreMatch;
        }

        if candidate.effective_rating() >= self.config.highly_rated_threshold {
            return RecommendationCategory::HighlyRated;
        }

        if candidate.item.popularity > self.config.trending_popularity {
            return RecommendationCategory::Trending;
        }

        RecommendationCategory::SimilarTaste
    }

    /// Page over an already-ranked list
    ///
    /// Pure post-processing: no scores are recomputed or reordered.
    pub fn rank_page(
        ranked: &[Recommendation],
        params: PaginationParams,
    ) -> PaginatedResponse<Recommendation> {
        PaginatedResponse::from_slice(ranked, params)
    }

    /// Filter an already-ranked list down to one category
    pub fn filter_category(
        ranked: &[Recommendation],
        category: RecommendationCategory,
    ) -> Vec<Recommendation> {
        ranked
            .iter()
            .filter(|r| r.category == category)
            .cloned()
            .collect()
    }
}
