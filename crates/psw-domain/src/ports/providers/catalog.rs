//! Service Catalog Port

use crate::error::Result;
use crate::value_objects::PathComponent;
use async_trait::async_trait;
use std::path::PathBuf;

/// Service directories that hold captures
#[async_trait]
pub trait ServiceCatalog: Send + Sync {
    /// Names of the available service directories, sorted
    async fn list_services(&self) -> Result<Vec<String>>;

    /// Path of a capture file inside a service directory
    fn capture_path(&self, service: &PathComponent, filename: &PathComponent) -> PathBuf;

    /// Root path as the search daemon sees it, for building scopes
    fn search_root(&self) -> &str;
}
