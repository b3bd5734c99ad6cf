//! Pagination utilities for ranked lists
//!
//! Ranked recommendation lists are ephemeral and regenerated per request, so
//! pagination here is plain offset slicing over an already-sorted list. Pages
//! never recompute or reorder scores.

use serde::{Deserialize, Serialize};

/// Default number of items per page
pub const DEFAULT_LIMIT: usize = 20;

/// Maximum number of items per page
pub const MAX_LIMIT: usize = 100;

/// Offset-based pagination parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationParams {
    /// Number of items to skip
    pub offset: usize,
    /// Maximum number of items to return
    pub limit: usize,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PaginationParams {
    /// Create parameters with the limit clamped to `[1, MAX_LIMIT]`
    pub fn new(offset: usize, limit: usize) -> Self {
        Self {
            offset,
            limit: limit.clamp(1, MAX_LIMIT),
        }
    }

    /// Create parameters from a 1-based page number
    pub fn page(page: usize, per_page: usize) -> Self {
        let per_page = per_page.clamp(1, MAX_LIMIT);
        Self {
            offset: page.saturating_sub(1) * per_page,
            limit: per_page,
        }
    }

    /// Slice a list according to these parameters
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.offset.min(items.len());
        let end = (self.offset + self.limit).min(items.len());
        &items[start..end]
    }
}

/// A page of results with total count and continuation flag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub has_more: bool,
}

impl<T: Clone> PaginatedResponse<T> {
    /// Build a page from a full result list
    pub fn from_slice(items: &[T], params: PaginationParams) -> Self {
        let page = params.slice(items);
        Self {
            items: page.to_vec(),
            total: items.len(),
            has_more: params.offset + page.len() < items.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let params = PaginationParams::default();
        assert_eq!(params.offset, 0);
        assert_eq!(params.limit, DEFAULT_LIMIT);
    }

    #[test]
    fn test_limit_clamping() {
        assert_eq!(PaginationParams::new(0, 500).limit, MAX_LIMIT);
        assert_eq!(PaginationParams::new(0, 0).limit, 1);
    }

    #[test]
    fn test_page_offsets() {
        let params = PaginationParams::page(3, 20);
        assert_eq!(params.offset, 40);
        assert_eq!(params.limit, 20);

        // Page 0 is treated as page 1
        assert_eq!(PaginationParams::page(0, 20).offset, 0);
    }

    #[test]
    fn test_slice_within_bounds() {
        let items: Vec<i32> = (0..50).collect();
        let page = PaginationParams::new(40, 20).slice(&items);
        assert_eq!(page.len(), 10);
        assert_eq!(page[0], 40);
    }

    #[test]
    fn test_slice_past_end() {
        let items: Vec<i32> = (0..10).collect();
        let page = PaginationParams::new(100, 20).slice(&items);
        assert!(page.is_empty());
    }

    #[test]
    fn test_paginated_response() {
        let items: Vec<i32> = (0..45).collect();
        let page = PaginatedResponse::from_slice(&items, PaginationParams::new(20, 20));
        assert_eq!(page.items.len(), 20);
        assert_eq!(page.total, 45);
        assert!(page.has_more);

        let last = PaginatedResponse::from_slice(&items, PaginationParams::new(40, 20));
        assert_eq!(last.items.len(), 5);
        assert!(!last.has_more);
    }
}
