//! Pagination and result page value objects

use crate::constants::{SEARCH_MAX_PAGES, SEARCH_PAGE_SIZE};
use crate::value_objects::{EnrichedHit, HitRecord, NormalizedQuery};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Pagination limits shared by the search client and the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Hits per page
    pub page_size: u32,
    /// Highest number of pages exposed
    pub max_pages: u32,
}

impl Pagination {
    /// Create pagination limits
    pub fn new(page_size: u32, max_pages: u32) -> Self {
        Self {
            page_size,
            max_pages,
        }
    }

    /// Hit offset of the first hit on `page` (zero-based)
    pub fn offset_for(&self, page: u32) -> u64 {
        u64::from(page) * u64::from(self.page_size)
    }

    /// Largest total the UI will ever be told about
    pub fn max_total(&self) -> u64 {
        u64::from(self.page_size) * u64::from(self.max_pages)
    }

    /// Clamp a daemon-reported total to what can be paginated
    pub fn clamp_total(&self, total: u64) -> u64 {
        total.min(self.max_total())
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(SEARCH_PAGE_SIZE, SEARCH_MAX_PAGES)
    }
}

/// One page of raw hits plus the (clamped) total count
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchHits {
    /// Hits on this page, in daemon order
    pub hits: Vec<HitRecord>,
    /// Total hit count, already clamped by the search client
    pub total: u64,
}

/// Value Object: Result Page
///
/// Enriched hits grouped by capture file name. Groups keep the order in
/// which their first hit was discovered, and hits keep discovery order
/// inside a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultPage {
    /// The normalized query, echoed back
    pub query: NormalizedQuery,
    /// Clamped total hit count
    pub total: u64,
    /// Hits keyed by capture file name
    pub results: IndexMap<String, Vec<EnrichedHit>>,
}

impl ResultPage {
    /// A page without any results
    pub fn empty(query: NormalizedQuery) -> Self {
        Self {
            query,
            total: 0,
            results: IndexMap::new(),
        }
    }

    /// Append a hit to the group of `file_name`
    pub fn push(&mut self, file_name: &str, hit: EnrichedHit) {
        self.results
            .entry(file_name.to_string())
            .or_default()
            .push(hit);
    }

    /// Number of hits across all groups
    pub fn hit_count(&self) -> usize {
        self.results.values().map(Vec::len).sum()
    }
}
