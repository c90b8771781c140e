//! Infrastructure layer constants
//!
//! Deployment defaults. Wire and pagination constants are defined in
//! `psw_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "psw.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "psw";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "PSW";

/// Separator between the prefix and nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// HTTP SERVER CONSTANTS
// ============================================================================

/// Default bind address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default HTTP port
pub const DEFAULT_HTTP_PORT: u16 = 4568;

/// Default directory of the static entry page
pub const DEFAULT_STATIC_DIR: &str = "static";

// ============================================================================
// BACKEND CONSTANTS
// ============================================================================

/// Socket of the search daemon
pub const DEFAULT_SEARCH_SOCKET: &str = "/tmp/search.sock";

/// Socket of the flow daemon
pub const DEFAULT_FLOW_SOCKET: &str = "/tmp/flow.sock";

/// Root of the capture tree
pub const DEFAULT_PCAP_DIR: &str = "/tmp/pcap";

/// Bound on one search or autocomplete exchange
pub const DEFAULT_SEARCH_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// FLOW LOOKUP CONSTANTS
// ============================================================================

/// Bound on one flow lookup
pub const DEFAULT_FLOW_LOOKUP_TIMEOUT_MS: u64 = 5_000;

/// Context helper program and arguments
pub const DEFAULT_CONTEXT_COMMAND: &[&str] = &["python2", "context.py"];

// ============================================================================
// SLICER CONSTANTS
// ============================================================================

/// Slicing program and fixed arguments
pub const DEFAULT_SLICER_COMMAND: &[&str] = &["python2", "offset2stream.py"];

/// Bound on one slicer run
pub const DEFAULT_SLICER_TIMEOUT_SECS: u64 = 60;

/// Wait between handing out a rendering and deleting it
pub const DEFAULT_CLEANUP_GRACE_MS: u64 = 1_000;

/// Prefix of temporary rendering files
pub const ARTIFACT_FILE_PREFIX: &str = "psw-";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "PSW_LOG";

/// File stem of rolled log files when none can be derived
pub const DEFAULT_LOG_FILE_STEM: &str = "psw";
