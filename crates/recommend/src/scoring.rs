//! Candidate scoring
//!
//! Computes a normalized match score in [0, 1] for one candidate against a
//! taste profile from five weighted sub-scores: genre match, rating fit,
//! year fit, popularity, and cast/crew overlap. All five terms are always
//! evaluated; a term whose inputs are missing contributes 0, so malformed
//! candidates score low instead of erroring out.

use crate::profile::UserPreferences;
use crate::types::{ReasonKind, RecommendationReason, ScoredCandidate};
use crate::RecommenderConfig;
use screenscout_core::EnrichedItem;

/// Maximum number of reasons attached to one candidate
const MAX_REASONS: usize = 3;

/// Scores candidates against a taste profile
#[derive(Debug, Clone)]
pub struct CandidateScorer {
    config: RecommenderConfig,
}

impl CandidateScorer {
    pub fn new(config: RecommenderConfig) -> Self {
        Self { config }
    }

    /// Score one candidate
    ///
    /// # Returns
    /// A score in [0, 1] plus up to three human-readable reasons. Reasons are
    /// generated independently of the score; each carries its own confidence.
    pub fn score(&self, candidate: &EnrichedItem, prefs: &UserPreferences) -> ScoredCandidate {
        let weights = &self.config.weights;

        let total = self.genre_score(candidate, prefs) * weights.genre
            + self.rating_score(candidate, prefs) * weights.rating
            + self.year_score(candidate, prefs) * weights.year
            + self.popularity_score(candidate) * weights.popularity
            + self.people_score(candidate, prefs) * weights.people;

        // All five terms are always considered, so the weight sum is constant
        let score = (total / weights.total()).clamp(0.0, 1.0);

        ScoredCandidate {
            score,
            reasons: self.build_reasons(candidate, prefs),
        }
    }

    /// Average preference weight over the candidate's genres
    ///
    /// Genres without a matching preference count as 0; an item with no
    /// genres contributes nothing to this term.
    fn genre_score(&self, candidate: &EnrichedItem, prefs: &UserPreferences) -> f32 {
        let genre_ids = &candidate.item.genre_ids;
        if genre_ids.is_empty() {
            return 0.0;
        }

        let matched: f32 = genre_ids
            .iter()
            .map(|id| {
                prefs
                    .favorite_genres
                    .iter()
                    .find(|g| g.genre_id == *id)
                    .map(|g| g.weight)
                    .unwrap_or(0.0)
            })
            .sum();

        matched / genre_ids.len() as f32
    }

    /// Rating fit: hard gate on the preference band, not a soft penalty
    fn rating_score(&self, candidate: &EnrichedItem, prefs: &UserPreferences) -> f32 {
        let rating = candidate.effective_rating();
        if !prefs.preferred_rating_range.contains(rating) {
            return 0.0;
        }

        (rating / 10.0).min(1.0)
    }

    /// Binary year fit against the preferred band
    fn year_score(&self, candidate: &EnrichedItem, prefs: &UserPreferences) -> f32 {
        match candidate.release_year() {
            Some(year) if prefs.preferred_year_range.contains(year) => 1.0,
            _ => 0.0,
        }
    }

    /// Popularity normalized by a stable tunable constant
    fn popularity_score(&self, candidate: &EnrichedItem) -> f32 {
        (candidate.item.popularity / self.config.popularity_norm).min(1.0)
    }

    /// Cast and director overlap with the profile
    ///
    /// Fractional cast overlap carries 0.7 of the term, a flat director match
    /// the remaining 0.3; capped at 1 before the term weight applies.
    fn people_score(&self, candidate: &EnrichedItem, prefs: &UserPreferences) -> f32 {
        let cast = &candidate.item.cast;

        let cast_fraction = if cast.is_empty() {
            0.0
        } else {
            let matched = cast
                .iter()
                .filter(|actor| prefs.actor_preferences.iter().any(|p| p == &actor.to_lowercase()))
                .count();
            matched as f32 / cast.len() as f32
        };

        let director_bonus = match candidate.item.director.as_deref() {
            Some(director)
                if prefs
                    .director_preferences
                    .iter()
                    .any(|p| p == &director.to_lowercase()) =>
            {
                1.0
            }
            _ => 0.0,
        };

        (0.7 * cast_fraction + 0.3 * director_bonus).min(1.0)
    }

    /// Generate justifications, strongest signal first
    fn build_reasons(
        &self,
        candidate: &EnrichedItem,
        prefs: &UserPreferences,
    ) -> Vec<RecommendationReason> {
        let mut reasons = Vec::new();

        // Highest-weight preferred genre the candidate carries
        let best_genre = prefs
            .favorite_genres
            .iter()
            .find(|g| candidate.item.genre_ids.contains(&g.genre_id));
        if let Some(genre) = best_genre {
            let label = genre
                .name
                .clone()
                .unwrap_or_else(|| genre.genre_id.to_string());
            reasons.push(RecommendationReason {
                kind: ReasonKind::Genre,
                text: format!("Matches your favorite genre: {}", label),
                confidence: 0.9,
            });
        }

        let rating = candidate.effective_rating();
        if rating > 0.0 && rating >= prefs.preferred_rating_range.min {
            reasons.push(RecommendationReason {
                kind: ReasonKind::Rating,
                text: format!("Highly rated: {:.1}/10", rating),
                confidence: 0.8,
            });
        }

        let known_actor = candidate
            .item
            .cast
            .iter()
            .find(|actor| prefs.actor_preferences.iter().any(|p| p == &actor.to_lowercase()));
        if let Some(actor) = known_actor {
            reasons.push(RecommendationReason {
                kind: ReasonKind::People,
                text: format!("Features {}", actor),
                confidence: 0.7,
            });
        } else if let Some(director) = candidate.item.director.as_deref() {
            if prefs
                .director_preferences
                .iter()
                .any(|p| p == &director.to_lowercase())
            {
                reasons.push(RecommendationReason {
                    kind: ReasonKind::People,
                    text: format!("Directed by {}", director),
                    confidence: 0.75,
                });
            }
        }

        reasons.truncate(MAX_REASONS);
        reasons
    }
}
