//! Domain Port Interfaces
//!
//! Boundaries between the result-shaping logic and the external processes
//! it talks to. Adapters live in `psw-providers` and `psw-infrastructure`.
//!
//! ## Ports
//!
//! | Port | Description |
//! |------|-------------|
//! | [`SearchBackend`] | Search daemon (full-text index over the captures) |
//! | [`FlowLookup`] | Flow metadata for individual hits |
//! | [`PcapSlicer`] | External slicing program |
//! | [`ServiceCatalog`] | Service directories under the capture root |
//! | [`ArtifactStore`] | Temporary files with deferred deletion |

/// Infrastructure ports
pub mod infrastructure;
/// Backend provider ports
pub mod providers;

pub use infrastructure::{ArtifactStore, TempArtifact};
pub use providers::{FlowLookup, FlowSession, PcapSlicer, SearchBackend, ServiceCatalog};
