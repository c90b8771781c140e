//! Search Backend Port
//!
//! Port for the full-text search daemon. One call is one connection and one
//! request/response exchange.

use crate::error::Result;
use crate::value_objects::{HitRecord, NormalizedQuery, SearchHits, SearchScope};
use async_trait::async_trait;

/// Search Backend Port
///
/// # Implementations
///
/// - **Unix socket**: the line protocol spoken by the search daemon
///
/// # Example
///
/// ```ignore
/// use psw_domain::ports::SearchBackend;
///
/// let page = backend.search(&scope, &query, 40).await?;
/// println!("{} hits on this page, {} in total", page.hits.len(), page.total);
/// ```
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Fetch one page of hits starting at hit number `page_offset`
    ///
    /// The returned total is clamped to what can be paginated.
    async fn search(
        &self,
        scope: &SearchScope,
        query: &NormalizedQuery,
        page_offset: u64,
    ) -> Result<SearchHits>;

    /// Fetch prefix matches together with the context that follows them
    async fn complete(&self, scope: &SearchScope, query: &NormalizedQuery)
    -> Result<Vec<HitRecord>>;

    /// Name of the backend, for logs
    fn provider_name(&self) -> &str;
}
