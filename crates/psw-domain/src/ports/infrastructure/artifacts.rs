//! Temporary Artifact Port
//!
//! Slice renderings are written to temporary files that must outlive the
//! handler that created them long enough to be streamed. The store owns
//! their deletion.

use crate::error::Result;
use std::fmt::Debug;
use std::path::Path;

/// A temporary file owned by the store
///
/// Dropping an artifact deletes its file.
pub trait TempArtifact: Send + Sync + Debug {
    /// Location of the file
    fn path(&self) -> &Path;

    /// Delete the file now, reporting failure
    fn delete(self: Box<Self>) -> Result<()>;
}

/// Allocator of temporary artifacts with deferred deletion
pub trait ArtifactStore: Send + Sync {
    /// Create a new empty file with a collision-resistant name
    fn allocate(&self, hint: &str) -> Result<Box<dyn TempArtifact>>;

    /// Delete `artifact` once the grace delay has elapsed
    ///
    /// Deletion runs on its own task and happens exactly once, whatever
    /// becomes of the request that scheduled it.
    fn release_later(&self, artifact: Box<dyn TempArtifact>);
}
