//! Backend provider ports

/// Service directory listing
pub mod catalog;
/// Flow metadata lookups
pub mod flow;
/// Search daemon access
pub mod search;
/// Pcap slicing
pub mod slicer;

pub use catalog::ServiceCatalog;
pub use flow::{FlowLookup, FlowSession};
pub use search::SearchBackend;
pub use slicer::PcapSlicer;
