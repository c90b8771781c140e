//! Main application configuration

use super::{
    AutocompleteConfig, BackendConfig, FlowConfig, LoggingConfig, SearchConfig, ServerConfig,
    SlicerConfig,
};
use serde::{Deserialize, Serialize};

/// Application configuration
///
/// Every section falls back to its defaults, so a configuration file only
/// needs the keys it changes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP server
    pub server: ServerConfig,
    /// Backend daemons and capture tree
    pub backend: BackendConfig,
    /// Result pagination
    pub search: SearchConfig,
    /// Suggestion derivation
    pub autocomplete: AutocompleteConfig,
    /// Flow metadata lookups
    pub flow: FlowConfig,
    /// Slicing program and temporary renderings
    pub slicer: SlicerConfig,
    /// Logging
    pub logging: LoggingConfig,
}
