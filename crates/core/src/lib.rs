//! # ScreenScout Core
//!
//! Core data structures and types for the ScreenScout discovery platform.
//!
//! This crate provides the fundamental building blocks shared by the provider
//! clients, the recommendation engine, and the watchlist store.
//!
//! ## Modules
//!
//! - `types`: Core type definitions and enums
//! - `models`: Domain models for catalog items, ratings, and saved items
//! - `error`: Error types and handling
//! - `pagination`: Pagination utilities for ranked lists
//! - `config`: Configuration loading and validation

pub mod config;
pub mod error;
pub mod models;
pub mod pagination;
pub mod types;

// Re-export commonly used types
pub use config::{load_dotenv, CacheConfig, ConfigLoader, ProviderConfig};
pub use error::CoreError;
pub use models::catalog::{CatalogItem, EnrichedItem, ProviderRating, ProviderRatings};
pub use models::watchlist::{SavedItem, WatchlistKey};
pub use pagination::{PaginatedResponse, PaginationParams, DEFAULT_LIMIT, MAX_LIMIT};
pub use types::{genre_name, ContentKind, DataSource};

/// Result type alias for ScreenScout core operations
pub type Result<T> = std::result::Result<T, CoreError>;
