//! Catalog Service Use Case

use crate::ports::services::CatalogServiceInterface;
use async_trait::async_trait;
use psw_domain::ports::providers::ServiceCatalog;
use psw_domain::value_objects::BackendOutcome;
use std::sync::Arc;

/// Lists the service directories captures are filed under
pub struct CatalogServiceImpl {
    catalog: Arc<dyn ServiceCatalog>,
}

impl CatalogServiceImpl {
    /// Create a catalog service
    pub fn new(catalog: Arc<dyn ServiceCatalog>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl CatalogServiceInterface for CatalogServiceImpl {
    async fn list_services(&self) -> BackendOutcome<Vec<String>> {
        match self.catalog.list_services().await {
            Ok(services) => BackendOutcome::from_value(services, Vec::is_empty),
            Err(e) => {
                tracing::warn!(error = %e, "cannot list service directories");
                BackendOutcome::failed(&e)
            }
        }
    }
}
