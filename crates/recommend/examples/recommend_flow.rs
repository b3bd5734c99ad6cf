//! Example: watchlist -> taste profile -> ranked recommendations
//!
//! Run with: cargo run -p screenscout-recommend --example recommend_flow

use chrono::{Datelike, Utc};
use screenscout_core::{CatalogItem, ContentKind, DataSource, EnrichedItem};
use screenscout_recommend::{BuildPreferences, RecommendationRanker, RecommenderConfig};
use screenscout_watchlist::WatchlistStore;

fn item(id: i64, title: &str, genres: &[i32], rating: f32, year: i32, popularity: f32) -> EnrichedItem {
    EnrichedItem {
        item: CatalogItem {
            id,
            kind: ContentKind::Movie,
            title: title.to_string(),
            overview: None,
            poster_path: None,
            backdrop_path: None,
            release_date: Some(format!("{}-01-01", year)),
            vote_average: rating,
            vote_count: 5000,
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

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let store = WatchlistStore::new();
    store.add(item(1, "Mad Max: Fury Road", &[28, 12], 8.1, 2015, 400.0));
    store.add(item(2, "John Wick", &[28, 53], 7.4, 2014, 650.0));
    store.add(item(3, "Dune", &[878, 12], 8.0, 2021, 800.0));

    let current_year = Utc::now().year();
    let config = RecommenderConfig::from_env();

    let saved = store.snapshot();
    if let Some(prefs) = BuildPreferences::execute(&saved, current_year, &config) {
        println!("Taste profile from {} saved items:", prefs.total_watched);
        for genre in &prefs.favorite_genres {
            println!(
                "  genre {:<20} weight {:.3}",
                genre.name.as_deref().unwrap_or("?"),
                genre.weight
            );
        }
        println!(
            "  rating band {:.1}-{:.1}, years {}-{}",
            prefs.preferred_rating_range.min,
            prefs.preferred_rating_range.max,
            prefs.preferred_year_range.min,
            prefs.preferred_year_range.max,
        );
    }

    let candidates = vec![
        item(10, "The Batman", &[80, 9648, 53], 7.7, 2022, 900.0),
        item(11, "Top Gun: Maverick", &[28, 18], 8.2, 2022, 1100.0),
        item(12, "Everything Everywhere All at Once", &[28, 12, 878], 7.8, 2022, 700.0),
        item(13, "Paddington 2", &[10751, 35], 7.8, 2017, 150.0),
        item(14, "Blade Runner 2049", &[878, 18], 7.9, 2017, 350.0),
    ];

    let ranker = RecommendationRanker::new(config);
    let ranked = ranker.rank(&candidates, &saved, current_year, 10);

    println!("\nRecommendations:");
    for rec in &ranked {
        println!(
            "  {:.3}  [{}]  {}",
            rec.score,
            rec.category.as_str(),
            rec.item.item.title
        );
        for reason in &rec.reasons {
            println!("         - {} ({:.0}%)", reason.text, reason.confidence * 100.0);
        }
    }

    Ok(())
}
