//! Taste profile derivation
//!
//! Builds a `UserPreferences` summary from the user's saved items:
//! - Genre weights jointly reward frequency and quality
//!   (occurrence share x average rating of the items carrying the genre)
//! - The rating band is permissive on the high side so good-but-different
//!   content still qualifies
//! - The year band keeps the most recent 70% of distinct release years,
//!   recent-skewed without fully discarding catalog depth
//!
//! The build is a pure function of the saved list: idempotent, clock-free
//! (the current year is an input), and safe to rerun on every watchlist
//! mutation.

use crate::types::{GenreAffinity, RatingRange, YearRange};
use crate::RecommenderConfig;
use screenscout_core::SavedItem;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Derived taste profile
///
/// Ephemeral: recomputed from scratch whenever the saved list changes, never
/// persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPreferences {
    /// Genre affinities, highest weight first
    pub favorite_genres: Vec<GenreAffinity>,
    /// Rating band a candidate must fall into to earn the rating term
    pub preferred_rating_range: RatingRange,
    /// Release-year band a candidate must fall into to earn the year term
    pub preferred_year_range: YearRange,
    /// Mean rating across saved items (non-positive ratings excluded)
    pub average_rating: f32,
    /// Saved-list size; the name predates the watched flag and stuck
    pub total_watched: usize,
    /// Most frequent original languages, case-normalized
    pub preferred_languages: Vec<String>,
    /// Most frequent top-billed actors, case-normalized
    pub actor_preferences: Vec<String>,
    /// Most frequent directors, case-normalized
    pub director_preferences: Vec<String>,
}

/// Build a taste profile from saved items
pub struct BuildPreferences;

impl BuildPreferences {
    /// Derive preferences from the saved list
    ///
    /// # Arguments
    /// * `saved` - The user's watchlist snapshot
    /// * `current_year` - Injected calendar year; upper bound of the year band
    /// * `config` - Engine tunables
    ///
    /// # Returns
    /// `None` for an empty list: the cold-start condition, not an error.
    pub fn execute(
        saved: &[SavedItem],
        current_year: i32,
        config: &RecommenderConfig,
    ) -> Option<UserPreferences> {
        if saved.is_empty() {
            return None;
        }

        let average_rating = Self::average_rating(saved);

        Some(UserPreferences {
            favorite_genres: Self::genre_affinities(saved, config.genre_limit),
            preferred_rating_range: RatingRange {
                min: (average_rating - config.rating_band_offset).max(0.0),
                max: 10.0,
            },
            preferred_year_range: Self::year_range(
                saved,
                current_year,
                config.recent_year_fraction,
            ),
            average_rating,
            total_watched: saved.len(),
            preferred_languages: Self::top_frequencies(
                saved
                    .iter()
                    .filter_map(|s| s.entry.item.original_language.as_deref()),
                config.language_limit,
            ),
            actor_preferences: Self::top_frequencies(
                saved.iter().flat_map(|s| {
                    s.entry
                        .item
                        .cast
                        .iter()
                        .take(config.cast_considered)
                        .map(|a| a.as_str())
                }),
                config.actor_limit,
            ),
            director_preferences: Self::top_frequencies(
                saved.iter().filter_map(|s| s.entry.item.director.as_deref()),
                config.director_limit,
            ),
        })
    }

    /// Weighted genre affinities, strongest first
    ///
    /// weight = (occurrence count / total saved) x (average rating of items
    /// with that genre / 10)
    fn genre_affinities(saved: &[SavedItem], limit: usize) -> Vec<GenreAffinity> {
        let total = saved.len() as f32;
        let mut counts: HashMap<i32, (usize, f32)> = HashMap::new();

        for item in saved {
            let rating = item.entry.effective_rating();
            for genre_id in &item.entry.item.genre_ids {
                let entry = counts.entry(*genre_id).or_insert((0, 0.0));
                entry.0 += 1;
                entry.1 += rating;
            }
        }

        let mut affinities: Vec<GenreAffinity> = counts
            .into_iter()
            .map(|(genre_id, (count, rating_sum))| {
                let frequency = count as f32 / total;
                let quality = rating_sum / count as f32 / 10.0;
                GenreAffinity::new(genre_id, frequency * quality)
            })
            .collect();

        // Stable output: weight descending, genre id as the final tiebreak
        affinities.sort_by(|a, b| {
            b.weight
                .partial_cmp(&a.weight)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.genre_id.cmp(&b.genre_id))
        });
        affinities.truncate(limit);
        affinities
    }

    /// Population mean of saved ratings, excluding non-positive values
    fn average_rating(saved: &[SavedItem]) -> f32 {
        let rated: Vec<f32> = saved
            .iter()
            .map(|s| s.entry.effective_rating())
            .filter(|r| *r > 0.0)
            .collect();

        if rated.is_empty() {
            return 0.0;
        }

        rated.iter().sum::<f32>() / rated.len() as f32
    }

    /// Year band over the most recent fraction of distinct release years
    fn year_range(saved: &[SavedItem], current_year: i32, recent_fraction: f32) -> YearRange {
        let mut years: Vec<i32> = saved.iter().filter_map(|s| s.entry.release_year()).collect();
        years.sort_unstable_by(|a, b| b.cmp(a));
        years.dedup();

        if years.is_empty() {
            return YearRange {
                min: current_year,
                max: current_year,
            };
        }

        let keep = ((years.len() as f32) * recent_fraction).ceil() as usize;
        let recent = &years[..keep.clamp(1, years.len())];

        YearRange {
            // `recent` is sorted descending, so its last entry is the oldest
            min: *recent.last().unwrap_or(&current_year),
            max: current_year,
        }
    }

    /// Case-insensitive frequency count, top `limit` retained
    ///
    /// Output values are lowercased; candidate matching folds case the same
    /// way. Ties resolve alphabetically for deterministic output.
    fn top_frequencies<'a>(values: impl Iterator<Item = &'a str>, limit: usize) -> Vec<String> {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for value in values {
            let normalized = value.trim().to_lowercase();
            if normalized.is_empty() {
                continue;
            }
            *counts.entry(normalized).or_insert(0) += 1;
        }

        let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        ranked.truncate(limit);
        ranked.into_iter().map(|(value, _)| value).collect()
    }
}
