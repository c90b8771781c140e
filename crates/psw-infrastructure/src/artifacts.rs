//! Temporary rendering files
//!
//! Slice renderings live in named temporary files. A file handed to the
//! HTTP layer is deleted on a tracked background task once the grace delay
//! has passed, or straight away when the store shuts down.

use crate::constants::ARTIFACT_FILE_PREFIX;
use crate::error_ext::ErrorContext;
use psw_domain::error::Result;
use psw_domain::ports::infrastructure::{ArtifactStore, TempArtifact};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::TempPath;
use tokio::runtime::Handle;
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;
use tracing::{debug, warn};

/// A temporary file; dropping it removes the file
#[derive(Debug)]
pub struct FileArtifact(TempPath);

impl TempArtifact for FileArtifact {
    fn path(&self) -> &Path {
        &self.0
    }

    fn delete(self: Box<Self>) -> Result<()> {
        let FileArtifact(temp_path) = *self;
        let path = temp_path.to_path_buf();
        temp_path
            .close()
            .io_context(format!("Failed to delete {}", path.display()))
    }
}

/// Artifact store backed by the filesystem
#[derive(Debug)]
pub struct TempArtifactStore {
    temp_dir: Option<PathBuf>,
    grace: Duration,
    tracker: TaskTracker,
    shutdown: CancellationToken,
}

impl TempArtifactStore {
    /// Create a store writing into `temp_dir`, or the system temp dir
    pub fn new(temp_dir: Option<PathBuf>, grace: Duration) -> Self {
        Self {
            temp_dir,
            grace,
            tracker: TaskTracker::new(),
            shutdown: CancellationToken::new(),
        }
    }

    /// Number of deletions still waiting out their grace delay
    pub fn pending(&self) -> usize {
        self.tracker.len()
    }

    /// Delete every pending artifact now and wait until that is done
    pub async fn shutdown(&self) {
        self.shutdown.cancel();
        self.tracker.close();
        self.tracker.wait().await;
    }
}

fn delete_now(artifact: Box<dyn TempArtifact>) {
    let path = artifact.path().to_path_buf();
    match artifact.delete() {
        Ok(()) => debug!(path = %path.display(), "Deleted temporary rendering"),
        Err(err) => warn!(path = %path.display(), error = %err, "Failed to delete temporary rendering"),
    }
}

impl ArtifactStore for TempArtifactStore {
    fn allocate(&self, hint: &str) -> Result<Box<dyn TempArtifact>> {
        let prefix = format!("{ARTIFACT_FILE_PREFIX}{hint}-");
        let mut builder = tempfile::Builder::new();
        builder.prefix(&prefix);
        let file = match &self.temp_dir {
            Some(dir) => builder.tempfile_in(dir),
            None => builder.tempfile(),
        }
        .io_context("Failed to create temporary rendering")?;

        Ok(Box::new(FileArtifact(file.into_temp_path())))
    }

    fn release_later(&self, artifact: Box<dyn TempArtifact>) {
        let handle = match Handle::try_current() {
            Ok(handle) if !self.shutdown.is_cancelled() => handle,
            _ => {
                delete_now(artifact);
                return;
            }
        };

        let grace = self.grace;
        let shutdown = self.shutdown.clone();
        self.tracker.spawn_on(
            async move {
                tokio::select! {
                    () = tokio::time::sleep(grace) => {}
                    () = shutdown.cancelled() => {}
                }
                delete_now(artifact);
            },
            &handle,
        );
    }
}
