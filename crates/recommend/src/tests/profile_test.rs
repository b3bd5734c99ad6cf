//! Taste profile builder tests

use super::fixtures::{action_fan_watchlist, ItemBuilder, TEST_YEAR};
use crate::profile::BuildPreferences;
use crate::RecommenderConfig;

#[test]
fn test_empty_watchlist_is_cold_start() {
    let config = RecommenderConfig::default();
    assert!(BuildPreferences::execute(&[], TEST_YEAR, &config).is_none());
}

#[test]
fn test_single_item_profile() {
    let config = RecommenderConfig::default();
    let saved = action_fan_watchlist();

    let prefs = BuildPreferences::execute(&saved, TEST_YEAR, &config).unwrap();

    // weight = (1/1) * (9.0/10) = 0.9
    assert_eq!(prefs.favorite_genres.len(), 1);
    assert_eq!(prefs.favorite_genres[0].genre_id, 28);
    assert!((prefs.favorite_genres[0].weight - 0.9).abs() < 0.001);
    assert_eq!(prefs.favorite_genres[0].name.as_deref(), Some("Action"));

    // band = [9.0 - 1.5, 10]
    assert!((prefs.preferred_rating_range.min - 7.5).abs() < 0.001);
    assert_eq!(prefs.preferred_rating_range.max, 10.0);

    assert_eq!(prefs.preferred_year_range.min, 2020);
    assert_eq!(prefs.preferred_year_range.max, TEST_YEAR);
    assert_eq!(prefs.total_watched, 1);
}

#[test]
fn test_genre_weights_reward_frequency_and_quality() {
    let config = RecommenderConfig::default();
    let saved = vec![
        ItemBuilder::new(1).genres(&[28]).rating(9.0).year(2020).saved(),
        ItemBuilder::new(2).genres(&[28]).rating(8.0).year(2021).saved(),
        ItemBuilder::new(3).genres(&[35]).rating(9.5).year(2022).saved(),
    ];

    let prefs = BuildPreferences::execute(&saved, TEST_YEAR, &config).unwrap();

    // Action: (2/3) * (8.5/10) ~ 0.567 beats Comedy: (1/3) * (9.5/10) ~ 0.317
    assert_eq!(prefs.favorite_genres[0].genre_id, 28);
    assert!((prefs.favorite_genres[0].weight - 0.5667).abs() < 0.001);
    assert_eq!(prefs.favorite_genres[1].genre_id, 35);
    assert!((prefs.favorite_genres[1].weight - 0.3167).abs() < 0.001);
}

#[test]
fn test_genre_list_truncated_to_limit() {
    let config = RecommenderConfig::default();
    let saved = vec![ItemBuilder::new(1)
        .genres(&[28, 12, 16, 35, 80, 99, 18])
        .rating(8.0)
        .year(2020)
        .saved()];

    let prefs = BuildPreferences::execute(&saved, TEST_YEAR, &config).unwrap();
    assert_eq!(prefs.favorite_genres.len(), config.genre_limit);
}

#[test]
fn test_average_excludes_unrated_items() {
    let config = RecommenderConfig::default();
    let saved = vec![
        ItemBuilder::new(1).genres(&[28]).rating(8.0).year(2020).saved(),
        // Unreleased item with no rating yet
        ItemBuilder::new(2).genres(&[28]).rating(0.0).year(2024).saved(),
    ];

    let prefs = BuildPreferences::execute(&saved, TEST_YEAR, &config).unwrap();
    assert!((prefs.average_rating - 8.0).abs() < 0.001);
    assert!((prefs.preferred_rating_range.min - 6.5).abs() < 0.001);
}

#[test]
fn test_rating_band_floor_at_zero() {
    let config = RecommenderConfig::default();
    let saved = vec![ItemBuilder::new(1).genres(&[28]).rating(1.0).year(2020).saved()];

    let prefs = BuildPreferences::execute(&saved, TEST_YEAR, &config).unwrap();
    assert_eq!(prefs.preferred_rating_range.min, 0.0);
}

#[test]
fn test_year_band_keeps_recent_fraction() {
    let config = RecommenderConfig::default();
    // Distinct years: 2023, 2022, 2021, 2015, 1999; ceil(5 * 0.7) = 4 kept,
    // so the band starts at 2015 and 1999 falls outside
    let saved = vec![
        ItemBuilder::new(1).genres(&[18]).rating(8.0).year(2023).saved(),
        ItemBuilder::new(2).genres(&[18]).rating(8.0).year(2022).saved(),
        ItemBuilder::new(3).genres(&[18]).rating(8.0).year(2021).saved(),
        ItemBuilder::new(4).genres(&[18]).rating(8.0).year(2015).saved(),
        ItemBuilder::new(5).genres(&[18]).rating(8.0).year(1999).saved(),
    ];

    let prefs = BuildPreferences::execute(&saved, TEST_YEAR, &config).unwrap();
    assert_eq!(prefs.preferred_year_range.min, 2015);
    assert_eq!(prefs.preferred_year_range.max, TEST_YEAR);
}

#[test]
fn test_year_band_without_release_dates() {
    let config = RecommenderConfig::default();
    let saved = vec![ItemBuilder::new(1).genres(&[18]).rating(8.0).saved()];

    let prefs = BuildPreferences::execute(&saved, TEST_YEAR, &config).unwrap();
    assert_eq!(prefs.preferred_year_range.min, TEST_YEAR);
    assert_eq!(prefs.preferred_year_range.max, TEST_YEAR);
}

#[test]
fn test_people_and_language_affinity_case_folded() {
    let config = RecommenderConfig::default();
    let saved = vec![
        ItemBuilder::new(1)
            .genres(&[28])
            .rating(8.0)
            .year(2020)
            .language("EN")
            .cast(&["Keanu Reeves", "Laurence Fishburne", "Carrie-Anne Moss", "Hugo Weaving"])
            .director("Lana Wachowski")
            .saved(),
        ItemBuilder::new(2)
            .genres(&[28])
            .rating(8.0)
            .year(2021)
            .language("en")
            .cast(&["KEANU REEVES", "Ian McShane"])
            .director("Chad Stahelski")
            .saved(),
    ];

    let prefs = BuildPreferences::execute(&saved, TEST_YEAR, &config).unwrap();

    // "EN" and "en" fold together
    assert_eq!(prefs.preferred_languages, vec!["en".to_string()]);

    // Keanu appears twice despite differing case; most frequent first
    assert_eq!(prefs.actor_preferences[0], "keanu reeves");
    // Only the first three cast entries per item count, so Hugo Weaving
    // never enters the tally
    assert!(!prefs.actor_preferences.contains(&"hugo weaving".to_string()));

    assert!(prefs
        .director_preferences
        .contains(&"lana wachowski".to_string()));
}

#[test]
fn test_build_is_deterministic() {
    let config = RecommenderConfig::default();
    let saved = vec![
        ItemBuilder::new(1).genres(&[28, 35]).rating(8.0).year(2020).saved(),
        ItemBuilder::new(2).genres(&[35, 18]).rating(7.0).year(2019).saved(),
        ItemBuilder::new(3).genres(&[18, 28]).rating(9.0).year(2023).saved(),
    ];

    let first = BuildPreferences::execute(&saved, TEST_YEAR, &config).unwrap();
    let second = BuildPreferences::execute(&saved, TEST_YEAR, &config).unwrap();
    assert_eq!(first, second);
}
