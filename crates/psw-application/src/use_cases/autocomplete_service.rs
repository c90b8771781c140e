//! Autocomplete Service Use Case

use crate::ports::services::AutocompleteServiceInterface;
use async_trait::async_trait;
use psw_domain::ports::providers::{PcapSlicer, SearchBackend, ServiceCatalog};
use psw_domain::value_objects::{
    AutocompleteMode, BackendOutcome, FailureReason, HitRecord, NormalizedQuery, SearchScope,
    ServiceSelector, SuggestionList, SuggestionSet, derive_suggestion,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Autocomplete service implementation
///
/// In [`AutocompleteMode::Located`] every completion is cut at the end of
/// the flow it was found in, which costs one slicer call per completion.
/// [`AutocompleteMode::Verbatim`] trusts the daemon's contexts as they are.
/// The completion exchange and every slicer call share one deadline.
pub struct AutocompleteServiceImpl {
    search: Arc<dyn SearchBackend>,
    slicer: Arc<dyn PcapSlicer>,
    catalog: Arc<dyn ServiceCatalog>,
    mode: AutocompleteMode,
    deadline: Duration,
}

impl AutocompleteServiceImpl {
    /// Create an autocomplete service
    pub fn new(
        search: Arc<dyn SearchBackend>,
        slicer: Arc<dyn PcapSlicer>,
        catalog: Arc<dyn ServiceCatalog>,
        mode: AutocompleteMode,
        deadline: Duration,
    ) -> Self {
        Self {
            search,
            slicer,
            catalog,
            mode,
            deadline,
        }
    }

    async fn located_suggestion(&self, record: &HitRecord) -> Option<String> {
        if record.is_bare() {
            return None;
        }
        let context = record.context()?;
        let source = record.capture_fs_path();

        match self.slicer.locate(source, record.offset).await {
            Ok(Some(span)) => derive_suggestion(context, record.offset, record.offset, span.end),
            Ok(None) => {
                debug!(path = %record.path, offset = record.offset, "slicer found no flow");
                None
            }
            Err(e) => {
                debug!(path = %record.path, offset = record.offset, error = %e, "locate failed");
                None
            }
        }
    }

    async fn collect(
        &self,
        scope: &SearchScope,
        query: NormalizedQuery,
    ) -> BackendOutcome<SuggestionList> {
        let records = match self.search.complete(scope, &query).await {
            Ok(records) => records,
            Err(e) => {
                warn!(
                    backend = self.search.provider_name(),
                    query = %query,
                    error = %e,
                    "autocomplete failed"
                );
                return BackendOutcome::failed(&e);
            }
        };

        let mut suggestions = SuggestionSet::new();
        for record in &records {
            let suggestion = match self.mode {
                AutocompleteMode::Verbatim => record
                    .context()
                    .filter(|context| !context.is_empty())
                    .map(str::to_string),
                AutocompleteMode::Located => self.located_suggestion(record).await,
            };
            if let Some(suggestion) = suggestion {
                suggestions.insert(suggestion);
            }
        }

        BackendOutcome::from_value(SuggestionList::new(query, suggestions), |list| {
            list.suggestions.is_empty()
        })
    }
}

#[async_trait]
impl AutocompleteServiceInterface for AutocompleteServiceImpl {
    async fn suggest(
        &self,
        raw_query: &str,
        selector: &ServiceSelector,
    ) -> BackendOutcome<SuggestionList> {
        let query = NormalizedQuery::new(raw_query);
        let scope = selector.scope(self.catalog.search_root());

        match tokio::time::timeout(self.deadline, self.collect(&scope, query.clone())).await {
            Ok(outcome) => outcome,
            Err(_) => {
                warn!(
                    query = %query,
                    timeout_secs = self.deadline.as_secs_f64(),
                    "autocomplete timed out"
                );
                BackendOutcome::Failed(FailureReason::Timeout)
            }
        }
    }
}
