//! Application Service Port Interfaces
//!
//! Contracts implemented by the use cases and consumed by the HTTP layer.
//! Mocks of these traits are what the handler tests run against.

use async_trait::async_trait;
use psw_domain::error::Result;
use psw_domain::ports::infrastructure::TempArtifact;
use psw_domain::value_objects::{
    BackendOutcome, DownloadRequest, RenderKind, ResultPage, ServiceSelector, SuggestionList,
};
use std::path::PathBuf;

// ============================================================================
// Search Service Interface
// ============================================================================

/// Search Service Interface
///
/// One result page: hits from the search daemon, enriched with flow
/// metadata and grouped by capture file.
#[async_trait]
pub trait SearchServiceInterface: Send + Sync {
    /// Run `raw_query` against the selected captures and build page `page`
    async fn search(
        &self,
        raw_query: &str,
        selector: &ServiceSelector,
        page: u32,
    ) -> BackendOutcome<ResultPage>;
}

// ============================================================================
// Autocomplete Service Interface
// ============================================================================

/// Autocomplete Service Interface
#[async_trait]
pub trait AutocompleteServiceInterface: Send + Sync {
    /// Suggest continuations of `raw_query`
    async fn suggest(
        &self,
        raw_query: &str,
        selector: &ServiceSelector,
    ) -> BackendOutcome<SuggestionList>;
}

// ============================================================================
// Download Service Interface
// ============================================================================

/// A download ready to be streamed
#[derive(Debug)]
pub enum PreparedDownload {
    /// The whole capture file, served as-is
    Capture {
        /// Location of the capture
        path: PathBuf,
        /// Attachment name offered to the browser
        attachment_name: String,
    },
    /// A rendering produced by the slicer into a temporary file
    Rendered {
        /// The temporary file; hand it back through
        /// [`DownloadServiceInterface::release`] once it is open
        artifact: Box<dyn TempArtifact>,
        /// Rendering that was requested
        kind: RenderKind,
        /// Attachment name offered to the browser
        attachment_name: String,
        /// Whether the slicer produced the rendering
        outcome: BackendOutcome<()>,
    },
}

/// Download Service Interface
#[async_trait]
pub trait DownloadServiceInterface: Send + Sync {
    /// Resolve the capture and, for slice kinds, run the slicer
    ///
    /// Fails only for requests that cannot be served at all; a slicer
    /// failure still yields a (possibly empty) rendering.
    async fn prepare(&self, request: &DownloadRequest) -> Result<PreparedDownload>;

    /// Schedule deletion of a rendering's temporary file
    ///
    /// Call once the file has been opened for streaming.
    fn release(&self, artifact: Box<dyn TempArtifact>);
}

// ============================================================================
// Catalog Service Interface
// ============================================================================

/// Catalog Service Interface
#[async_trait]
pub trait CatalogServiceInterface: Send + Sync {
    /// Names of the service directories, sorted
    async fn list_services(&self) -> BackendOutcome<Vec<String>>;
}
