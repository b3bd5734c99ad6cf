//! Watchlist entry models
//!
//! Saved items are owned exclusively by the client-side watchlist store; no
//! server copy exists. The recommendation engine only ever reads snapshots.

use crate::models::catalog::EnrichedItem;
use crate::types::ContentKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identity key for a saved item
///
/// Uniqueness invariant: no two saved items share both id and kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WatchlistKey {
    pub id: i64,
    pub kind: ContentKind,
}

/// A watchlist entry
///
/// Lifecycle: insert, zero or more watched toggles, optional removal.
/// `added_at` is stamped at insertion and never changes; `watched_at` is set
/// on the transition to watched and cleared on the transition back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedItem {
    #[serde(flatten)]
    pub entry: EnrichedItem,

    /// Insertion timestamp, immutable
    pub added_at: DateTime<Utc>,

    /// Whether the user has marked this item watched
    #[serde(default)]
    pub watched: bool,

    /// Timestamp of the most recent transition to watched
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watched_at: Option<DateTime<Utc>>,
}

impl SavedItem {
    /// Create a fresh, unwatched entry
    pub fn new(entry: EnrichedItem, added_at: DateTime<Utc>) -> Self {
        Self {
            entry,
            added_at,
            watched: false,
            watched_at: None,
        }
    }

    /// Identity key of this entry
    pub fn key(&self) -> WatchlistKey {
        self.entry.key()
    }
}
