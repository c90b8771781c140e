//! Configuration
//!
//! [`AppConfig`] is built once at start by the [`ConfigLoader`] and shared
//! read-only afterwards.

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::{
    AppConfig, AutocompleteConfig, BackendConfig, FlowConfig, FlowMode, LoggingConfig,
    SearchConfig, ServerConfig, SlicerConfig,
};
