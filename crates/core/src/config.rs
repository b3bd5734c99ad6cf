//! Configuration loading for ScreenScout services
//!
//! Environment-based configuration with a `SCREENSCOUT_` prefix, `.env` file
//! support via dotenvy, and defaults for optional fields. Override hierarchy:
//! defaults < .env < environment.
//!
//! # Example
//!
//! ```no_run
//! use screenscout_core::config::{load_dotenv, CacheConfig, ConfigLoader, ProviderConfig};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! load_dotenv();
//!
//! let providers = ProviderConfig::from_env()?;
//! let cache = CacheConfig::from_env()?;
//!
//! providers.validate()?;
//! cache.validate()?;
//! # Ok(())
//! # }
//! ```

use crate::error::CoreError;
use std::time::Duration;
use url::Url;

/// Load a `.env` file if one is present
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

/// Configuration loader trait
///
/// Provides standardized methods for loading and validating configuration
/// from environment variables.
pub trait ConfigLoader: Sized {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a `ConfigurationError` if required variables are missing or
    /// values cannot be parsed.
    fn from_env() -> Result<Self, CoreError>;

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns a `ConfigurationError` if any validation check fails.
    fn validate(&self) -> Result<(), CoreError>;
}

/// Upstream provider configuration
///
/// # Environment Variables
///
/// - `SCREENSCOUT_CATALOG_API_KEY` (required): catalog provider API key
/// - `SCREENSCOUT_CATALOG_BASE_URL` (optional): catalog API base URL
/// - `SCREENSCOUT_RATINGS_API_KEY` (required): ratings provider API key
/// - `SCREENSCOUT_RATINGS_BASE_URL` (optional): ratings API base URL
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Catalog provider API key
    pub catalog_api_key: String,
    /// Catalog provider base URL
    pub catalog_base_url: String,
    /// Ratings provider API key
    pub ratings_api_key: String,
    /// Ratings provider base URL
    pub ratings_base_url: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            catalog_api_key: String::new(),
            catalog_base_url: "https://api.themoviedb.org/3".to_string(),
            ratings_api_key: String::new(),
            ratings_base_url: "https://www.omdbapi.com".to_string(),
        }
    }
}

impl ConfigLoader for ProviderConfig {
    fn from_env() -> Result<Self, CoreError> {
        let defaults = ProviderConfig::default();

        let catalog_api_key = std::env::var("SCREENSCOUT_CATALOG_API_KEY").map_err(|_| {
            CoreError::config(
                "SCREENSCOUT_CATALOG_API_KEY must be set",
                "SCREENSCOUT_CATALOG_API_KEY",
            )
        })?;

        let ratings_api_key = std::env::var("SCREENSCOUT_RATINGS_API_KEY").map_err(|_| {
            CoreError::config(
                "SCREENSCOUT_RATINGS_API_KEY must be set",
                "SCREENSCOUT_RATINGS_API_KEY",
            )
        })?;

        Ok(Self {
            catalog_api_key,
            catalog_base_url: std::env::var("SCREENSCOUT_CATALOG_BASE_URL")
                .unwrap_or(defaults.catalog_base_url),
            ratings_api_key,
            ratings_base_url: std::env::var("SCREENSCOUT_RATINGS_BASE_URL")
                .unwrap_or(defaults.ratings_base_url),
        })
    }

    fn validate(&self) -> Result<(), CoreError> {
        for (url, key) in [
            (&self.catalog_base_url, "SCREENSCOUT_CATALOG_BASE_URL"),
            (&self.ratings_base_url, "SCREENSCOUT_RATINGS_BASE_URL"),
        ] {
            Url::parse(url).map_err(|e| {
                CoreError::config(format!("Invalid provider base URL: {}", e), key)
            })?;
        }

        if self.catalog_api_key.is_empty() {
            return Err(CoreError::config(
                "catalog API key must not be empty",
                "SCREENSCOUT_CATALOG_API_KEY",
            ));
        }

        if self.ratings_api_key.is_empty() {
            return Err(CoreError::config(
                "ratings API key must not be empty",
                "SCREENSCOUT_RATINGS_API_KEY",
            ));
        }

        Ok(())
    }
}

/// Response cache configuration
///
/// # Environment Variables
///
/// - `SCREENSCOUT_CATALOG_CACHE_TTL` (optional): catalog TTL in seconds (default: 21600)
/// - `SCREENSCOUT_RATINGS_CACHE_TTL` (optional): ratings TTL in seconds (default: 86400)
/// - `SCREENSCOUT_CACHE_CAPACITY` (optional): max entries per cache (default: 10000)
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached catalog responses
    pub catalog_ttl: Duration,
    /// TTL for cached ratings responses; the ratings provider enforces a
    /// daily quota, so this stays long
    pub ratings_ttl: Duration,
    /// Maximum number of entries per cache
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            catalog_ttl: Duration::from_secs(6 * 3600),
            ratings_ttl: Duration::from_secs(86400),
            max_capacity: 10_000,
        }
    }
}

impl ConfigLoader for CacheConfig {
    fn from_env() -> Result<Self, CoreError> {
        let catalog_ttl_secs = parse_env_var("SCREENSCOUT_CATALOG_CACHE_TTL", 6 * 3600u64)?;
        let ratings_ttl_secs = parse_env_var("SCREENSCOUT_RATINGS_CACHE_TTL", 86400u64)?;
        let max_capacity = parse_env_var("SCREENSCOUT_CACHE_CAPACITY", 10_000u64)?;

        Ok(Self {
            catalog_ttl: Duration::from_secs(catalog_ttl_secs),
            ratings_ttl: Duration::from_secs(ratings_ttl_secs),
            max_capacity,
        })
    }

    fn validate(&self) -> Result<(), CoreError> {
        if self.catalog_ttl.as_secs() == 0 || self.ratings_ttl.as_secs() == 0 {
            return Err(CoreError::ConfigurationError {
                message: "cache TTLs must be greater than 0 seconds".to_string(),
                key: None,
            });
        }

        if self.max_capacity == 0 {
            return Err(CoreError::config(
                "cache capacity must be greater than 0",
                "SCREENSCOUT_CACHE_CAPACITY",
            ));
        }

        Ok(())
    }
}

/// Parse an environment variable with a typed default
fn parse_env_var<T: std::str::FromStr>(key: &str, default: T) -> Result<T, CoreError> {
    match std::env::var(key) {
        Ok(value) => value
            .parse::<T>()
            .map_err(|_| CoreError::config(format!("cannot parse {}", key), key)),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_provider_config() {
        let config = ProviderConfig::default();
        assert_eq!(config.catalog_base_url, "https://api.themoviedb.org/3");
        assert_eq!(config.ratings_base_url, "https://www.omdbapi.com");
    }

    #[test]
    fn test_validate_rejects_empty_keys() {
        let config = ProviderConfig::default();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_populated_config() {
        let config = ProviderConfig {
            catalog_api_key: "key".to_string(),
            ratings_api_key: "key".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cache_config_defaults() {
        let config = CacheConfig::default();
        assert_eq!(config.catalog_ttl.as_secs(), 6 * 3600);
        assert_eq!(config.ratings_ttl.as_secs(), 86400);
        assert!(config.validate().is_ok());
    }
}
