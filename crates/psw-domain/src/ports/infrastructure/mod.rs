//! Infrastructure ports

/// Temporary artifacts
pub mod artifacts;

pub use artifacts::{ArtifactStore, TempArtifact};
