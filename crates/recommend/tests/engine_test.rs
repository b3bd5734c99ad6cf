//! End-to-end engine tests: watchlist snapshot -> taste profile -> ranking

use screenscout_core::{
    CatalogItem, ContentKind, DataSource, EnrichedItem, PaginationParams,
};
use screenscout_recommend::{
    BuildPreferences, RecommendationCategory, RecommendationRanker, RecommenderConfig,
};
use screenscout_watchlist::WatchlistStore;

const CURRENT_YEAR: i32 = 2024;

fn enriched(
    id: i64,
    genres: &[i32],
    rating: f32,
    year: i32,
    popularity: f32,
) -> EnrichedItem {
    EnrichedItem {
        item: CatalogItem {
            id,
            kind: ContentKind::Movie,
            title: format!("Movie {}", id),
            overview: Some("Synopsis".to_string()),
            poster_path: None,
            backdrop_path: None,
            release_date: Some(format!("{}-03-01", year)),
            vote_average: rating,
            vote_count: 1200,
            genre_ids: genres.to_vec(),
            popularity,
            original_language: Some("en".to_string()),
            cast: vec![],
            director: None,
            imdb_id: None,
        },
        ratings: None,
        aggregated_score: rating,
        data_source: DataSource::PrimaryOnly,
    }
}

#[test]
fn test_full_flow_from_store_to_ranked_list() {
    let store = WatchlistStore::new();
    assert!(store.add(enriched(1, &[28, 12], 8.8, 2020, 250.0)));
    assert!(store.add(enriched(2, &[28], 9.0, 2022, 400.0)));
    assert!(store.add(enriched(3, &[35], 7.5, 2019, 150.0)));

    let saved = store.snapshot();
    let config = RecommenderConfig::default();

    let prefs = BuildPreferences::execute(&saved, CURRENT_YEAR, &config).unwrap();
    assert_eq!(prefs.total_watched, 3);
    // Action appears in two of three well-rated items, so it leads
    assert_eq!(prefs.favorite_genres[0].genre_id, 28);

    let candidates = vec![
        enriched(1, &[28, 12], 8.8, 2020, 250.0), // already saved
        enriched(10, &[28], 8.6, 2023, 700.0),
        enriched(11, &[28, 53], 8.1, 2021, 300.0),
        enriched(12, &[99], 6.2, 1995, 20.0), // far from the profile
    ];

    let ranker = RecommendationRanker::new(config);
    let ranked = ranker.rank(&candidates, &saved, CURRENT_YEAR, 10);

    // The saved item and the weak match are gone
    assert_eq!(ranked.len(), 2);
    assert!(ranked.iter().all(|r| r.item.item.id != 1));
    assert!(ranked.iter().all(|r| r.item.item.id != 12));

    // Ranked output is sorted, categorized, scored in bounds, justified
    for rec in &ranked {
        assert!(rec.score >= 0.3 && rec.score <= 1.0);
        assert!(!rec.reasons.is_empty());
    }
    assert!(ranked[0].score >= ranked[1].score);
    assert_eq!(ranked[0].category, RecommendationCategory::GenreMatch);
}

#[test]
fn test_watchlist_mutations_shift_the_profile() {
    let store = WatchlistStore::new();
    store.add(enriched(1, &[35], 8.0, 2015, 100.0));

    let config = RecommenderConfig::default();
    let before = BuildPreferences::execute(&store.snapshot(), CURRENT_YEAR, &config).unwrap();
    assert_eq!(before.favorite_genres[0].genre_id, 35);

    // Saving two strong action titles flips the leading genre
    store.add(enriched(2, &[28], 9.5, 2022, 500.0));
    store.add(enriched(3, &[28], 9.0, 2023, 450.0));

    let after = BuildPreferences::execute(&store.snapshot(), CURRENT_YEAR, &config).unwrap();
    assert_eq!(after.favorite_genres[0].genre_id, 28);

    // Removing them restores the original shape
    store.remove(screenscout_core::WatchlistKey {
        id: 2,
        kind: ContentKind::Movie,
    });
    store.remove(screenscout_core::WatchlistKey {
        id: 3,
        kind: ContentKind::Movie,
    });

    let restored = BuildPreferences::execute(&store.snapshot(), CURRENT_YEAR, &config).unwrap();
    assert_eq!(restored, before);
}

#[test]
fn test_empty_store_serves_trending_shelf() {
    let store = WatchlistStore::new();
    let candidates = vec![
        enriched(10, &[28], 8.0, 2023, 900.0),
        enriched(11, &[18], 7.0, 2022, 1400.0),
        enriched(12, &[35], 6.5, 2021, 90.0), // under the popularity floor
    ];

    let ranker = RecommendationRanker::new(RecommenderConfig::default());
    let ranked = ranker.rank(&candidates, &store.snapshot(), CURRENT_YEAR, 10);

    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].item.item.id, 11);
    assert!(ranked
        .iter()
        .all(|r| r.category == RecommendationCategory::Trending));
}

#[test]
fn test_paged_views_are_stable_slices() {
    let store = WatchlistStore::new();
    store.add(enriched(1, &[28], 9.0, 2021, 300.0));
    let saved = store.snapshot();

    let candidates: Vec<EnrichedItem> = (100..160)
        .map(|id| enriched(id, &[28], 7.8 + (id % 20) as f32 / 10.0, 2022, 350.0))
        .collect();

    let ranker = RecommendationRanker::new(RecommenderConfig::default());
    let ranked = ranker.rank(&candidates, &saved, CURRENT_YEAR, 50);

    let pages: Vec<_> = (1..=5)
        .map(|p| RecommendationRanker::rank_page(&ranked, PaginationParams::page(p, 10)))
        .collect();

    let stitched: Vec<_> = pages.iter().flat_map(|p| p.items.clone()).collect();
    assert_eq!(stitched, ranked);
}
