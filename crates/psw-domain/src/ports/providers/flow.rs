//! Flow Lookup Port
//!
//! Port for the per-hit flow metadata lookup. A lookup session is opened
//! once per result page and queried once per hit, strictly one request at
//! a time.

use crate::error::Result;
use crate::value_objects::{FlowKey, FlowMetadata};
use async_trait::async_trait;

/// Factory of lookup sessions
///
/// # Implementations
///
/// - **Socket**: one connection to the flow daemon per hit
/// - **Subprocess**: one helper process per session, driven line by line
#[async_trait]
pub trait FlowLookup: Send + Sync {
    /// Open a session for the hits of one page
    async fn open_session(&self) -> Result<Box<dyn FlowSession>>;

    /// Name of the lookup, for logs
    fn provider_name(&self) -> &str;
}

/// A lookup session; the next hit is not requested before the previous
/// answer has been read
#[async_trait]
pub trait FlowSession: Send {
    /// Look up the flow metadata of one hit
    async fn lookup(&mut self, key: &FlowKey) -> Result<FlowMetadata>;
}
