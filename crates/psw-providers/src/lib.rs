//! # pcap-search-web - Backend Adapters
//!
//! Implementations of the `psw-domain` ports that talk to the processes
//! doing the real work: the search daemon, the flow daemon or its helper
//! script, and the slicing program.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Search | `SearchBackend` | Unix socket |
//! | Flow | `FlowLookup` | Unix socket, subprocess |
//! | Slicer | `PcapSlicer` | Subprocess |
//! | Catalog | `ServiceCatalog` | Filesystem |
//!
//! The byte layout shared by all of them lives in [`protocol`].

pub use psw_domain::error::{Error, Result};
pub use psw_domain::ports::providers::{
    FlowLookup, FlowSession, PcapSlicer, SearchBackend, ServiceCatalog,
};

/// Provider-specific constants
pub mod constants;

/// Wire codec for the daemon and helper protocols
pub mod protocol;

/// Search daemon clients
pub mod search;

/// Flow metadata lookups
pub mod flow;

/// Slicing program adapters
pub mod slicer;

/// Service directory catalogs
pub mod catalog;

pub use catalog::FilesystemServiceCatalog;
pub use flow::{SocketFlowLookup, SubprocessFlowLookup};
pub use search::UnixSocketSearchBackend;
pub use slicer::SubprocessPcapSlicer;
