//! ScreenScout Recommendation Engine
//!
//! Deterministic, content-based personalization: infers a taste profile from
//! the user's watchlist, scores candidate titles against it with weighted
//! feature sub-scores, and ranks the survivors into categorized lists.
//!
//! Every function here is a pure, synchronous transformation over in-memory
//! data: no I/O, no clocks (the current year is an explicit input), no
//! hidden state. Scoring one candidate never depends on another, so callers
//! may parallelize over a candidate pool freely.

pub mod cold_start;
pub mod profile;
pub mod ranker;
pub mod scoring;
pub mod types;

// Re-export key types
pub use cold_start::ColdStartRanker;
pub use profile::{BuildPreferences, UserPreferences};
pub use ranker::RecommendationRanker;
pub use scoring::CandidateScorer;
pub use types::{
    GenreAffinity, RatingRange, ReasonKind, Recommendation, RecommendationCategory,
    RecommendationReason, ScoredCandidate, YearRange,
};

use tracing::warn;

/// Relative weights of the five scoring terms
///
/// All five terms are always evaluated (contributing 0 when their inputs are
/// missing), so the weights sum to the score's upper bound of 1.0.
#[derive(Debug, Clone, Copy)]
pub struct ScoreWeights {
    pub genre: f32,
    pub rating: f32,
    pub year: f32,
    pub popularity: f32,
    pub people: f32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            genre: 0.40,
            rating: 0.25,
            year: 0.15,
            popularity: 0.10,
            people: 0.10,
        }
    }
}

impl ScoreWeights {
    /// Sum of all term weights
    pub fn total(&self) -> f32 {
        self.genre + self.rating + self.year + self.popularity + self.people
    }
}

/// Recommendation engine configuration
///
/// The normalization constant for popularity and the rating-band offset are
/// tunables without a derivation from first principles; they live here rather
/// than as hard-coded constants so product can adjust them.
#[derive(Debug, Clone)]
pub struct RecommenderConfig {
    /// Scoring term weights
    pub weights: ScoreWeights,
    /// Favorite genres retained in a profile
    pub genre_limit: usize,
    /// Preferred languages retained in a profile
    pub language_limit: usize,
    /// Preferred actors retained in a profile
    pub actor_limit: usize,
    /// Preferred directors retained in a profile
    pub director_limit: usize,
    /// Cast entries per saved item counted toward actor affinity; avoids
    /// overweighting items with large ensembles
    pub cast_considered: usize,
    /// Subtracted from the average rating to form the band's lower bound
    pub rating_band_offset: f32,
    /// Fraction of most-recent distinct release years forming the year band
    pub recent_year_fraction: f32,
    /// Popularity value mapped to a full popularity sub-score
    pub popularity_norm: f32,
    /// Minimum score for inclusion in ranked output
    pub min_score: f32,
    /// Popularity floor for cold-start candidates
    pub cold_start_popularity_floor: f32,
    /// Popularity above which an item counts as trending
    pub trending_popularity: f32,
    /// Rating at or above which an item counts as highly rated
    pub highly_rated_threshold: f32,
    /// Genre-reason confidence above which an item is categorized as a
    /// genre match
    pub genre_category_confidence: f32,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            weights: ScoreWeights::default(),
            genre_limit: 5,
            language_limit: 3,
            actor_limit: 10,
            director_limit: 5,
            cast_considered: 3,
            rating_band_offset: 1.5,
            recent_year_fraction: 0.7,
            popularity_norm: 1000.0,
            min_score: 0.3,
            cold_start_popularity_floor: 100.0,
            trending_popularity: 500.0,
            highly_rated_threshold: 8.0,
            genre_category_confidence: 0.7,
        }
    }
}

impl RecommenderConfig {
    /// Load tunables from the environment, falling back to defaults
    ///
    /// Recognized variables: `SCREENSCOUT_RECOMMEND_POPULARITY_NORM`,
    /// `SCREENSCOUT_RECOMMEND_RATING_BAND_OFFSET`,
    /// `SCREENSCOUT_RECOMMEND_MIN_SCORE`. Unparsable values keep the default
    /// with a warning rather than failing startup.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.popularity_norm = env_tunable(
            "SCREENSCOUT_RECOMMEND_POPULARITY_NORM",
            config.popularity_norm,
        );
        config.rating_band_offset = env_tunable(
            "SCREENSCOUT_RECOMMEND_RATING_BAND_OFFSET",
            config.rating_band_offset,
        );
        config.min_score = env_tunable("SCREENSCOUT_RECOMMEND_MIN_SCORE", config.min_score);
        config
    }
}

fn env_tunable(key: &str, default: f32) -> f32 {
    match std::env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            warn!("cannot parse {} value {:?}, keeping default", key, raw);
            default
        }),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests;

#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn test_default_weights_sum_to_one() {
        let weights = ScoreWeights::default();
        assert!((weights.total() - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_default_config() {
        let config = RecommenderConfig::default();
        assert_eq!(config.genre_limit, 5);
        assert_eq!(config.min_score, 0.3);
        assert_eq!(config.popularity_norm, 1000.0);
        assert_eq!(config.rating_band_offset, 1.5);
    }
}
