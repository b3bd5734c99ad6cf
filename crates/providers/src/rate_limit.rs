//! Rate limiting for upstream API calls

use crate::Result;
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Jitter, Quota, RateLimiter};
use nonzero_ext::nonzero;
use std::collections::HashMap;
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// Rate limiter for a single provider
struct ProviderRateLimiter {
    limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
}

impl ProviderRateLimiter {
    fn new(max_requests: u32, window: Duration) -> Self {
        let quota = Quota::with_period(window)
            .unwrap_or_else(|| Quota::per_second(nonzero!(1u32)))
            .allow_burst(NonZeroU32::new(max_requests.max(1)).unwrap_or(nonzero!(1u32)));

        Self {
            limiter: Arc::new(RateLimiter::direct(quota)),
        }
    }

    /// Wait until a request permit is available
    async fn check_and_wait(&self) -> Result<()> {
        // Jitter avoids thundering herd when many enrichments queue at once
        self.limiter
            .until_ready_with_jitter(Jitter::up_to(Duration::from_millis(100)))
            .await;
        Ok(())
    }
}

/// Rate limit manager for all upstream providers
pub struct RateLimitManager {
    limiters: Arc<RwLock<HashMap<String, Arc<ProviderRateLimiter>>>>,
}

impl RateLimitManager {
    /// Create a new rate limit manager
    pub fn new() -> Self {
        Self {
            limiters: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Register a provider with rate limiting configuration
    ///
    /// # Arguments
    /// * `provider_id` - Provider identifier
    /// * `max_requests` - Maximum requests per time window
    /// * `window` - Time window duration
    pub async fn register_provider(
        &self,
        provider_id: String,
        max_requests: u32,
        window: Duration,
    ) {
        let limiter = Arc::new(ProviderRateLimiter::new(max_requests, window));

        let mut limiters = self.limiters.write().await;
        limiters.insert(provider_id.clone(), limiter);

        debug!(
            "Registered rate limiter for {} with {} req per {:?}",
            provider_id, max_requests, window
        );
    }

    /// Check rate limit and wait if necessary
    ///
    /// # Arguments
    /// * `provider_id` - Provider identifier
    ///
    /// # Returns
    /// Ok when ready to proceed; unknown providers pass through with a warning
    pub async fn check_and_wait(&self, provider_id: &str) -> Result<()> {
        let limiters = self.limiters.read().await;

        if let Some(limiter) = limiters.get(provider_id) {
            limiter.check_and_wait().await
        } else {
            warn!("No rate limiter configured for {}", provider_id);
            Ok(())
        }
    }

    /// Initialize default rate limiters for the known providers
    pub async fn init_defaults(&self) {
        // Catalog API: 40 req per 10 seconds
        self.register_provider("catalog".to_string(), 40, Duration::from_secs(10))
            .await;

        // Ratings API: 1000 req per day
        self.register_provider("ratings".to_string(), 1000, Duration::from_secs(86400))
            .await;

        debug!("Initialized default rate limiters");
    }
}

impl Default for RateLimitManager {
    fn default() -> Self {
        Self::new()
    }
}
