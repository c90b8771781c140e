//! Pcap Slicer Port
//!
//! Port for the external program that cuts a flow out of a capture and
//! renders it.

use crate::error::Result;
use crate::value_objects::{FlowSpan, SliceOutput, SliceRequest};
use async_trait::async_trait;
use std::path::Path;

/// Pcap Slicer Port
///
/// # Implementations
///
/// - **Subprocess**: runs the slicing program with positional arguments
#[async_trait]
pub trait PcapSlicer: Send + Sync {
    /// Render the flow selected by `request` into `destination`
    async fn slice(&self, request: &SliceRequest, destination: &Path) -> Result<SliceOutput>;

    /// Byte span of the flow that contains `offset`, if any
    async fn locate(&self, source: &Path, offset: u64) -> Result<Option<FlowSpan>>;
}
