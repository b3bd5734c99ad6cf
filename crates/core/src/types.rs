//! Core type definitions for the ScreenScout platform

use serde::{Deserialize, Serialize};

/// Kind of catalog content
///
/// Set once at ingestion from the endpoint that produced the record; never
/// inferred downstream from the shape of a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Movie,
    Tv,
}

impl ContentKind {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Tv => "tv",
        }
    }

    /// Path segment used by the catalog provider for this kind
    pub fn catalog_path(&self) -> &'static str {
        self.as_str()
    }

    /// Type value used by the ratings provider for this kind
    pub fn ratings_type(&self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Tv => "series",
        }
    }
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Provenance of an enriched item's rating data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataSource {
    /// Only the catalog provider contributed rating data
    #[serde(rename = "primary-only")]
    PrimaryOnly,
    /// Both the catalog and the ratings provider contributed
    #[serde(rename = "primary+secondary")]
    PrimarySecondary,
}

/// Resolve a catalog genre id to its display name
///
/// Covers the catalog provider's movie and TV genre taxonomies. Unknown ids
/// return `None`; callers fall back to the numeric id for display.
pub fn genre_name(id: i32) -> Option<&'static str> {
    let name = match id {
        28 => "Action",
        12 => "Adventure",
        16 => "Animation",
        35 => "Comedy",
        80 => "Crime",
        99 => "Documentary",
        18 => "Drama",
        10751 => "Family",
        14 => "Fantasy",
        36 => "History",
        27 => "Horror",
        10402 => "Music",
        9648 => "Mystery",
        10749 => "Romance",
        878 => "Science Fiction",
        10770 => "TV Movie",
        53 => "Thriller",
        10752 => "War",
        37 => "Western",
        10759 => "Action & Adventure",
        10762 => "Kids",
        10763 => "News",
        10764 => "Reality",
        10765 => "Sci-Fi & Fantasy",
        10766 => "Soap",
        10767 => "Talk",
        10768 => "War & Politics",
        _ => return None,
    };
    Some(name)
}
