//! Download Service Use Case
//!
//! Passthrough downloads only resolve the capture path. Every other kind
//! runs the slicer into a fresh temporary artifact; the artifact is handed
//! to the caller even when the slicer fails, so the response is an empty
//! file rather than an error.

use crate::ports::services::{DownloadServiceInterface, PreparedDownload};
use async_trait::async_trait;
use psw_domain::error::{Error, Result};
use psw_domain::ports::infrastructure::{ArtifactStore, TempArtifact};
use psw_domain::ports::providers::{PcapSlicer, ServiceCatalog};
use psw_domain::value_objects::{BackendOutcome, DownloadRequest, FailureReason, SliceRequest};
use std::sync::Arc;
use tracing::{debug, warn};

/// Download service implementation
pub struct DownloadServiceImpl {
    slicer: Arc<dyn PcapSlicer>,
    catalog: Arc<dyn ServiceCatalog>,
    artifacts: Arc<dyn ArtifactStore>,
}

impl DownloadServiceImpl {
    /// Create a download service
    pub fn new(
        slicer: Arc<dyn PcapSlicer>,
        catalog: Arc<dyn ServiceCatalog>,
        artifacts: Arc<dyn ArtifactStore>,
    ) -> Self {
        Self {
            slicer,
            catalog,
            artifacts,
        }
    }
}

#[async_trait]
impl DownloadServiceInterface for DownloadServiceImpl {
    async fn prepare(&self, request: &DownloadRequest) -> Result<PreparedDownload> {
        let source = self
            .catalog
            .capture_path(&request.service, &request.filename);
        let attachment_name = request.attachment_name();

        if request.kind.is_passthrough() {
            return Ok(PreparedDownload::Capture {
                path: source,
                attachment_name,
            });
        }

        let offset = request.offset.ok_or_else(|| {
            Error::invalid_argument(format!("type '{}' requires an offset", request.kind))
        })?;
        let artifact = self.artifacts.allocate(request.filename.as_str())?;
        let slice = SliceRequest::new(source, offset, request.kind);

        let outcome = match self.slicer.slice(&slice, artifact.path()).await {
            Ok(output) if output.succeeded() => {
                debug!(
                    source = %slice.source.display(),
                    offset,
                    kind = %slice.kind,
                    "slice rendered"
                );
                BackendOutcome::Success(())
            }
            Ok(output) => {
                warn!(
                    source = %slice.source.display(),
                    offset,
                    kind = %slice.kind,
                    exit_code = ?output.exit_code,
                    "slicer failed, serving an empty rendering"
                );
                BackendOutcome::Failed(FailureReason::Subprocess(format!(
                    "slicer exited with {:?}",
                    output.exit_code
                )))
            }
            Err(e) => {
                warn!(
                    source = %slice.source.display(),
                    offset,
                    kind = %slice.kind,
                    error = %e,
                    "slicer could not run, serving an empty rendering"
                );
                BackendOutcome::failed(&e)
            }
        };

        Ok(PreparedDownload::Rendered {
            artifact,
            kind: request.kind,
            attachment_name,
            outcome,
        })
    }

    fn release(&self, artifact: Box<dyn TempArtifact>) {
        self.artifacts.release_later(artifact);
    }
}
