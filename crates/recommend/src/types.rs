//! Recommendation engine types

use screenscout_core::{genre_name, EnrichedItem};
use serde::{Deserialize, Serialize};

/// Bucket assigned to every surviving recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationCategory {
    BecauseYouWatched,
    GenreMatch,
    HighlyRated,
    Trending,
    SimilarTaste,
}

impl RecommendationCategory {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BecauseYouWatched => "because_you_watched",
            Self::GenreMatch => "genre_match",
            Self::HighlyRated => "highly_rated",
            Self::Trending => "trending",
            Self::SimilarTaste => "similar_taste",
        }
    }
}

/// What a recommendation reason is grounded on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReasonKind {
    Genre,
    Rating,
    People,
    Popularity,
}

/// One human-readable justification for a recommendation
///
/// Confidence is independent of the aggregate score; it expresses how strong
/// this particular signal is on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationReason {
    pub kind: ReasonKind,
    pub text: String,
    pub confidence: f32,
}

/// Score and reasons for one candidate, before ranking
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate {
    /// Match score in [0, 1]
    pub score: f32,
    /// Up to three justifications, strongest signal first
    pub reasons: Vec<RecommendationReason>,
}

/// A ranked recommendation ready for presentation
///
/// Ephemeral: regenerated per request, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub item: EnrichedItem,
    pub score: f32,
    pub reasons: Vec<RecommendationReason>,
    pub category: RecommendationCategory,
}

/// Weighted affinity for one genre
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenreAffinity {
    pub genre_id: i32,
    /// Display name when the id is in the known taxonomy
    pub name: Option<String>,
    /// Joint frequency/quality weight, non-negative
    pub weight: f32,
}

impl GenreAffinity {
    pub fn new(genre_id: i32, weight: f32) -> Self {
        Self {
            genre_id,
            name: genre_name(genre_id).map(|s| s.to_string()),
            weight,
        }
    }
}

/// Inclusive rating band on the 0-10 scale
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingRange {
    pub min: f32,
    pub max: f32,
}

impl RatingRange {
    pub fn contains(&self, rating: f32) -> bool {
        rating >= self.min && rating <= self.max
    }
}

/// Inclusive release-year band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    pub min: i32,
    pub max: i32,
}

impl YearRange {
    pub fn contains(&self, year: i32) -> bool {
        year >= self.min && year <= self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serialization() {
        assert_eq!(
            serde_json::to_string(&RecommendationCategory::GenreMatch).unwrap(),
            "\"genre_match\""
        );
        assert_eq!(RecommendationCategory::BecauseYouWatched.as_str(), "because_you_watched");
    }

    #[test]
    fn test_genre_affinity_resolves_name() {
        let affinity = GenreAffinity::new(28, 0.9);
        assert_eq!(affinity.name.as_deref(), Some("Action"));

        let unknown = GenreAffinity::new(424242, 0.1);
        assert!(unknown.name.is_none());
    }

    #[test]
    fn test_ranges_are_inclusive() {
        let rating = RatingRange { min: 7.5, max: 10.0 };
        assert!(rating.contains(7.5));
        assert!(rating.contains(10.0));
        assert!(!rating.contains(7.49));

        let years = YearRange { min: 2015, max: 2024 };
        assert!(years.contains(2015));
        assert!(!years.contains(2014));
    }
}
