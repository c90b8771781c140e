//! Server constants

// ============================================================================
// ERROR CODES
// ============================================================================

/// Request parameters missing or invalid (HTTP 412)
pub const ERROR_CODE_PRECONDITION_FAILED: &str = "PRECONDITION_FAILED";

/// Capture file does not exist (HTTP 404)
pub const ERROR_CODE_NOT_FOUND: &str = "NOT_FOUND";

/// Rendering could not be opened (HTTP 500)
pub const ERROR_CODE_INTERNAL: &str = "INTERNAL_ERROR";

// ============================================================================
// HTTP
// ============================================================================

/// Entry page served for `/`
pub const INDEX_FILE: &str = "index.html";

/// Rocket's own log level; tracing owns the output
pub const ROCKET_LOG_LEVEL: &str = "critical";

/// Rank of the static file server, behind every API route
pub const STATIC_FILES_RANK: isize = 20;
