//! Flow Lookup Implementations
//!
//! | Provider | Transport | Session |
//! |----------|-----------|---------|
//! | [`SocketFlowLookup`] | Flow daemon socket | One connection per hit |
//! | [`SubprocessFlowLookup`] | Context helper program | One process per page, one line per hit |

pub mod socket;
pub mod subprocess;

pub use socket::SocketFlowLookup;
pub use subprocess::SubprocessFlowLookup;
