//! Enrichment pipeline
//!
//! Joins catalog items with secondary-provider ratings under bounded
//! parallelism. Enrichment never fails a batch: a secondary lookup that
//! errors or finds no match degrades that one item to primary-only data.

use crate::normalizer::RatingNormalizer;
use crate::rate_limit::RateLimitManager;
use crate::ratings::{RatingsClient, RatingsRecord};
use crate::Result;
use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use screenscout_core::{CatalogItem, EnrichedItem};
use std::sync::Arc;
use tracing::{debug, warn};

/// Default number of concurrent secondary lookups
pub const DEFAULT_CONCURRENCY: usize = 4;

/// Secondary-provider lookup seam
///
/// Abstracts the ratings client so the pipeline can be exercised without
/// network access.
#[async_trait]
pub trait RatingsLookup: Send + Sync {
    /// Fetch the raw ratings record for one catalog item
    async fn lookup(&self, item: &CatalogItem) -> Result<RatingsRecord>;
}

#[async_trait]
impl RatingsLookup for RatingsClient {
    async fn lookup(&self, item: &CatalogItem) -> Result<RatingsRecord> {
        // The cross-provider id is exact; title+year is the fallback key
        match &item.imdb_id {
            Some(imdb_id) => self.lookup_by_imdb(imdb_id).await,
            None => {
                self.lookup_by_title(&item.title, item.release_year(), item.kind)
                    .await
            }
        }
    }
}

/// Enrichment pipeline orchestrator
pub struct EnrichmentPipeline {
    ratings: Arc<dyn RatingsLookup>,
    normalizer: RatingNormalizer,
    rate_limiter: Arc<RateLimitManager>,
}

impl EnrichmentPipeline {
    /// Create a new enrichment pipeline
    pub fn new(
        ratings: Arc<dyn RatingsLookup>,
        normalizer: RatingNormalizer,
        rate_limiter: Arc<RateLimitManager>,
    ) -> Self {
        Self {
            ratings,
            normalizer,
            rate_limiter,
        }
    }

    /// Enrich a single catalog item
    ///
    /// Lookup failure is not an error; the item comes back tagged
    /// primary-only.
    pub async fn enrich(&self, item: CatalogItem) -> EnrichedItem {
        if self.rate_limiter.check_and_wait("ratings").await.is_err() {
            return self.normalizer.normalize(item, None);
        }

        match self.ratings.lookup(&item).await {
            Ok(record) => {
                debug!(id = item.id, matched = record.found(), "secondary lookup");
                self.normalizer.normalize(item, Some(&record))
            }
            Err(e) => {
                warn!(id = item.id, error = %e, "secondary lookup failed, using primary data only");
                self.normalizer.normalize(item, None)
            }
        }
    }

    /// Enrich a batch of catalog items with bounded parallelism
    ///
    /// # Arguments
    /// * `items` - Catalog items to enrich
    /// * `concurrency` - Maximum in-flight secondary lookups
    ///
    /// # Returns
    /// One enriched item per input, in input order
    pub async fn enrich_all(
        &self,
        items: Vec<CatalogItem>,
        concurrency: usize,
    ) -> Vec<EnrichedItem> {
        stream::iter(items)
            .map(|item| self.enrich(item))
            .buffered(concurrency.max(1))
            .collect()
            .await
    }
}
