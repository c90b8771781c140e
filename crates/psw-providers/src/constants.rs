//! Provider Constants
//!
//! Constants specific to the backend adapters. Wire delimiters shared with
//! the domain live in `psw_domain::constants`.

// ============================================================================
// PROVIDER NAMES
// ============================================================================

/// Name of the Unix socket search backend
pub const SEARCH_PROVIDER_UNIX_SOCKET: &str = "unix-socket";

/// Name of the socket flow lookup
pub const FLOW_PROVIDER_SOCKET: &str = "socket";

/// Name of the subprocess flow lookup
pub const FLOW_PROVIDER_SUBPROCESS: &str = "subprocess";

// ============================================================================
// SUBPROCESS CONSTANTS
// ============================================================================

/// Destination the slicer writes `loc` answers to
pub const SLICER_LOCATE_DESTINATION: &str = "/dev/stdout";

/// Placeholder the context helper puts in the first response field
pub const FLOW_RESPONSE_PLACEHOLDER: &str = "_";

// ============================================================================
// BUFFER CONSTANTS
// ============================================================================

/// Initial capacity of a search response buffer
pub const SEARCH_RESPONSE_CAPACITY: usize = 16 * 1024;

/// Initial capacity of a flow response buffer
pub const FLOW_RESPONSE_CAPACITY: usize = 512;
