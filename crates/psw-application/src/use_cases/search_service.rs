//! Search Service Use Case
//!
//! Fetches one page of hits, looks up the flow of every hit in a single
//! lookup session and groups the survivors by capture file.

use crate::ports::services::SearchServiceInterface;
use async_trait::async_trait;
use psw_domain::ports::providers::{FlowLookup, FlowSession, SearchBackend, ServiceCatalog};
use psw_domain::value_objects::{
    BackendOutcome, EnrichedHit, FlowKey, HitRecord, NormalizedQuery, Pagination, ResultPage,
    ServiceSelector,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Search service implementation
pub struct SearchServiceImpl {
    search: Arc<dyn SearchBackend>,
    flow: Arc<dyn FlowLookup>,
    catalog: Arc<dyn ServiceCatalog>,
    pagination: Pagination,
    flow_timeout: Duration,
}

impl SearchServiceImpl {
    /// Create a search service
    ///
    /// `flow_timeout` bounds each flow lookup on its own.
    pub fn new(
        search: Arc<dyn SearchBackend>,
        flow: Arc<dyn FlowLookup>,
        catalog: Arc<dyn ServiceCatalog>,
        pagination: Pagination,
        flow_timeout: Duration,
    ) -> Self {
        Self {
            search,
            flow,
            catalog,
            pagination,
            flow_timeout,
        }
    }

    /// Look up one hit, returning it enriched or `None` when it must be dropped
    async fn enrich(&self, session: &mut dyn FlowSession, hit: &HitRecord) -> Option<EnrichedHit> {
        let key = FlowKey::from_hit(hit)?;
        match tokio::time::timeout(self.flow_timeout, session.lookup(&key)).await {
            Ok(Ok(metadata)) if metadata.is_usable() => Some(EnrichedHit::new(hit, metadata)),
            Ok(Ok(metadata)) => {
                debug!(
                    path = %hit.path,
                    offset = hit.offset,
                    epoch = metadata.epoch,
                    "dropping hit without usable flow metadata"
                );
                None
            }
            Ok(Err(e)) => {
                debug!(path = %hit.path, offset = hit.offset, error = %e, "flow lookup failed");
                None
            }
            Err(_) => {
                debug!(
                    path = %hit.path,
                    offset = hit.offset,
                    timeout_ms = self.flow_timeout.as_millis(),
                    "flow lookup timed out"
                );
                None
            }
        }
    }
}

#[async_trait]
impl SearchServiceInterface for SearchServiceImpl {
    async fn search(
        &self,
        raw_query: &str,
        selector: &ServiceSelector,
        page: u32,
    ) -> BackendOutcome<ResultPage> {
        let query = NormalizedQuery::new(raw_query);
        let scope = selector.scope(self.catalog.search_root());
        let page_offset = self.pagination.offset_for(page);

        let found = match self.search.search(&scope, &query, page_offset).await {
            Ok(found) => found,
            Err(e) => {
                warn!(
                    backend = self.search.provider_name(),
                    query = %query,
                    error = %e,
                    "search failed"
                );
                return BackendOutcome::failed(&e);
            }
        };

        let mut result = ResultPage::empty(query);
        result.total = found.total;
        if found.hits.is_empty() {
            return BackendOutcome::from_value(result, |page| page.total == 0);
        }

        let mut session = match self.flow.open_session().await {
            Ok(session) => session,
            Err(e) => {
                warn!(
                    lookup = self.flow.provider_name(),
                    error = %e,
                    "cannot open flow lookup session"
                );
                return BackendOutcome::failed(&e);
            }
        };

        for hit in &found.hits {
            if let Some(enriched) = self.enrich(session.as_mut(), hit).await {
                result.push(hit.file_name(), enriched);
            }
        }

        debug!(
            hits = found.hits.len(),
            kept = result.hit_count(),
            total = result.total,
            "search page assembled"
        );
        BackendOutcome::Success(result)
    }
}
