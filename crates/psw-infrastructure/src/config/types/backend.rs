//! Backend configuration types
//!
//! Where the daemons listen, which helper programs run, and how long each
//! of them may take.

use crate::constants::{
    DEFAULT_CLEANUP_GRACE_MS, DEFAULT_CONTEXT_COMMAND, DEFAULT_FLOW_LOOKUP_TIMEOUT_MS,
    DEFAULT_FLOW_SOCKET, DEFAULT_PCAP_DIR, DEFAULT_SEARCH_SOCKET, DEFAULT_SEARCH_TIMEOUT_SECS,
    DEFAULT_SLICER_COMMAND, DEFAULT_SLICER_TIMEOUT_SECS,
};
use psw_domain::constants::{DEFAULT_SERVICE, SEARCH_MAX_PAGES, SEARCH_PAGE_SIZE};
use psw_domain::value_objects::{AutocompleteMode, Pagination};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

fn command(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|part| (*part).to_string()).collect()
}

/// Search daemon and capture tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Socket of the search daemon
    pub search_socket: PathBuf,

    /// Socket of the flow daemon
    pub flow_socket: PathBuf,

    /// Root of the capture tree, one directory per service
    pub pcap_dir: PathBuf,

    /// Service searched when a request names none
    pub default_service: String,

    /// Bound on one search or autocomplete exchange, in seconds
    pub search_timeout_secs: u64,
}

impl BackendConfig {
    /// Search exchange bound
    pub fn search_timeout(&self) -> Duration {
        Duration::from_secs(self.search_timeout_secs)
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            search_socket: PathBuf::from(DEFAULT_SEARCH_SOCKET),
            flow_socket: PathBuf::from(DEFAULT_FLOW_SOCKET),
            pcap_dir: PathBuf::from(DEFAULT_PCAP_DIR),
            default_service: DEFAULT_SERVICE.to_string(),
            search_timeout_secs: DEFAULT_SEARCH_TIMEOUT_SECS,
        }
    }
}

/// Result pagination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Hits per page
    pub page_size: u32,

    /// Highest number of pages exposed
    pub max_pages: u32,
}

impl SearchConfig {
    /// Pagination limits
    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.page_size, self.max_pages)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            page_size: SEARCH_PAGE_SIZE,
            max_pages: SEARCH_MAX_PAGES,
        }
    }
}

/// Suggestion derivation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutocompleteConfig {
    /// `located` or `verbatim`
    pub mode: AutocompleteMode,
}

/// Transport of the flow metadata lookup
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowMode {
    /// Flow daemon socket, one connection per hit
    #[default]
    Socket,
    /// Context helper program, one process per page
    Subprocess,
}

/// Flow metadata lookups
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowConfig {
    /// Lookup transport
    pub mode: FlowMode,

    /// Context helper program and arguments, for the subprocess transport
    pub context_command: Vec<String>,

    /// Bound on one lookup, in milliseconds
    pub lookup_timeout_ms: u64,
}

impl FlowConfig {
    /// Per-lookup bound
    pub fn lookup_timeout(&self) -> Duration {
        Duration::from_millis(self.lookup_timeout_ms)
    }
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            mode: FlowMode::default(),
            context_command: command(DEFAULT_CONTEXT_COMMAND),
            lookup_timeout_ms: DEFAULT_FLOW_LOOKUP_TIMEOUT_MS,
        }
    }
}

/// Slicing program and temporary renderings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlicerConfig {
    /// Slicing program and fixed arguments
    pub command: Vec<String>,

    /// Bound on one slicer run, in seconds
    pub timeout_secs: u64,

    /// Wait before a handed-out rendering is deleted, in milliseconds
    pub cleanup_grace_ms: u64,

    /// Directory for renderings; the system temp dir when unset
    pub temp_dir: Option<PathBuf>,
}

impl SlicerConfig {
    /// Slicer run bound
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Cleanup grace delay
    pub fn cleanup_grace(&self) -> Duration {
        Duration::from_millis(self.cleanup_grace_ms)
    }
}

impl Default for SlicerConfig {
    fn default() -> Self {
        Self {
            command: command(DEFAULT_SLICER_COMMAND),
            timeout_secs: DEFAULT_SLICER_TIMEOUT_SECS,
            cleanup_grace_ms: DEFAULT_CLEANUP_GRACE_MS,
            temp_dir: None,
        }
    }
}
