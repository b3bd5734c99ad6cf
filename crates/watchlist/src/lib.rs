//! ScreenScout Watchlist Store
//!
//! In-process saved-items store keyed by `(id, kind)`. This is the single
//! owner of watchlist state: the recommendation engine and presentation
//! layer only ever read snapshots. No server copy exists.
//!
//! Lifecycle per entry: insert, zero or more watched toggles, optional
//! removal. `added_at` is stamped at insertion and never changes;
//! `watched_at` tracks only the most recent transition to watched.

use chrono::Utc;
use dashmap::DashMap;
use screenscout_core::{EnrichedItem, SavedItem, WatchlistKey};
use tracing::debug;

/// Concurrent watchlist store
///
/// Uniqueness invariant: no two entries share both id and kind.
#[derive(Debug, Default)]
pub struct WatchlistStore {
    items: DashMap<WatchlistKey, SavedItem>,
}

impl WatchlistStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            items: DashMap::new(),
        }
    }

    /// Add an item to the watchlist
    ///
    /// # Returns
    /// `false` when an entry with the same `(id, kind)` already exists; the
    /// existing entry (and its `added_at`) is left untouched.
    pub fn add(&self, entry: EnrichedItem) -> bool {
        let key = entry.key();
        if self.items.contains_key(&key) {
            return false;
        }

        debug!(id = key.id, kind = %key.kind, "watchlist add");
        self.items.insert(key, SavedItem::new(entry, Utc::now()));
        true
    }

    /// Remove an item, returning it if present
    pub fn remove(&self, key: WatchlistKey) -> Option<SavedItem> {
        let removed = self.items.remove(&key).map(|(_, item)| item);
        if removed.is_some() {
            debug!(id = key.id, kind = %key.kind, "watchlist remove");
        }
        removed
    }

    /// Toggle the watched flag of an entry
    ///
    /// The transition to watched stamps `watched_at`; the transition back
    /// clears it. `added_at` is never touched.
    ///
    /// # Returns
    /// The new watched state, or `None` when the key is unknown.
    pub fn toggle_watched(&self, key: WatchlistKey) -> Option<bool> {
        let mut entry = self.items.get_mut(&key)?;

        entry.watched = !entry.watched;
        entry.watched_at = if entry.watched { Some(Utc::now()) } else { None };

        Some(entry.watched)
    }

    /// Whether an entry with this key exists
    pub fn contains(&self, key: WatchlistKey) -> bool {
        self.items.contains_key(&key)
    }

    /// Number of saved items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the watchlist is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Read-only snapshot, most recently added first
    ///
    /// The snapshot is a deep copy; consumers (profile building, ranking)
    /// operate on it without holding any lock.
    pub fn snapshot(&self) -> Vec<SavedItem> {
        let mut items: Vec<SavedItem> = self
            .items
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        items.sort_by(|a, b| b.added_at.cmp(&a.added_at).then(a.key().id.cmp(&b.key().id)));
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use screenscout_core::{CatalogItem, ContentKind, DataSource};

    fn enriched(id: i64, kind: ContentKind) -> EnrichedItem {
        EnrichedItem {
            item: CatalogItem {
                id,
                kind,
                title: format!("Title {}", id),
                overview: None,
                poster_path: None,
                backdrop_path: None,
                release_date: None,
                vote_average: 7.0,
                vote_count: 100,
                genre_ids: vec![18],
                popularity: 50.0,
                original_language: Some("en".to_string()),
                cast: vec![],
                director: None,
                imdb_id: None,
            },
            ratings: None,
            aggregated_score: 7.0,
            data_source: DataSource::PrimaryOnly,
        }
    }

    #[test]
    fn test_add_enforces_uniqueness() {
        let store = WatchlistStore::new();

        assert!(store.add(enriched(1, ContentKind::Movie)));
        assert!(!store.add(enriched(1, ContentKind::Movie)));
        // Same id, different kind is a different identity
        assert!(store.add(enriched(1, ContentKind::Tv)));

        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_added_at_survives_duplicate_add() {
        let store = WatchlistStore::new();
        store.add(enriched(1, ContentKind::Movie));

        let key = WatchlistKey {
            id: 1,
            kind: ContentKind::Movie,
        };
        let original = store.snapshot()[0].added_at;

        store.add(enriched(1, ContentKind::Movie));
        assert_eq!(store.snapshot()[0].added_at, original);
        assert!(store.contains(key));
    }

    #[test]
    fn test_toggle_watched_transitions() {
        let store = WatchlistStore::new();
        store.add(enriched(1, ContentKind::Movie));
        let key = WatchlistKey {
            id: 1,
            kind: ContentKind::Movie,
        };

        assert_eq!(store.toggle_watched(key), Some(true));
        let watched = store.snapshot()[0].clone();
        assert!(watched.watched);
        assert!(watched.watched_at.is_some());

        assert_eq!(store.toggle_watched(key), Some(false));
        let unwatched = store.snapshot()[0].clone();
        assert!(!unwatched.watched);
        assert!(unwatched.watched_at.is_none());
        // added_at unaffected by the round trip
        assert_eq!(unwatched.added_at, watched.added_at);
    }

    #[test]
    fn test_toggle_unknown_key() {
        let store = WatchlistStore::new();
        let key = WatchlistKey {
            id: 404,
            kind: ContentKind::Movie,
        };
        assert_eq!(store.toggle_watched(key), None);
    }

    #[test]
    fn test_remove() {
        let store = WatchlistStore::new();
        store.add(enriched(1, ContentKind::Movie));
        let key = WatchlistKey {
            id: 1,
            kind: ContentKind::Movie,
        };

        let removed = store.remove(key).unwrap();
        assert_eq!(removed.entry.item.id, 1);
        assert!(store.is_empty());
        assert!(store.remove(key).is_none());
    }

    #[test]
    fn test_snapshot_is_detached() {
        let store = WatchlistStore::new();
        store.add(enriched(1, ContentKind::Movie));

        let snapshot = store.snapshot();
        store.add(enriched(2, ContentKind::Movie));

        // The earlier snapshot does not observe later mutations
        assert_eq!(snapshot.len(), 1);
        assert_eq!(store.len(), 2);
    }
}
