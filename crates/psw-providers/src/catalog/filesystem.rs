//! Filesystem service catalog
//!
//! Every non-hidden directory directly under the capture root is a service.

use async_trait::async_trait;
use psw_domain::error::{Error, Result};
use psw_domain::ports::providers::ServiceCatalog;
use psw_domain::value_objects::PathComponent;
use std::path::PathBuf;

/// Catalog of the service directories under a capture root
#[derive(Debug, Clone)]
pub struct FilesystemServiceCatalog {
    root: PathBuf,
    search_root: String,
}

impl FilesystemServiceCatalog {
    /// Create a catalog over `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let search_root = root.to_string_lossy().into_owned();
        Self { root, search_root }
    }
}

#[async_trait]
impl ServiceCatalog for FilesystemServiceCatalog {
    async fn list_services(&self) -> Result<Vec<String>> {
        let mut entries = tokio::fs::read_dir(&self.root).await.map_err(|e| {
            Error::io_with_source(format!("cannot list {}", self.root.display()), e)
        })?;

        let mut services = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with('.') {
                continue;
            }
            // Follows symlinks, so linked service directories are listed too
            let is_dir = tokio::fs::metadata(entry.path())
                .await
                .is_ok_and(|meta| meta.is_dir());
            if is_dir {
                services.push(name);
            }
        }

        services.sort();
        Ok(services)
    }

    fn capture_path(&self, service: &PathComponent, filename: &PathComponent) -> PathBuf {
        self.root.join(service.as_str()).join(filename.as_str())
    }

    fn search_root(&self) -> &str {
        &self.search_root
    }
}
