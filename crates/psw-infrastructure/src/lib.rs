//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns of the pcap search front end.
//!
//! ## Module Categories
//!
//! ### Configuration & Wiring
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-based configuration (defaults, TOML, `PSW__` environment) |
//! | [`di`] | Builds the adapters and use cases selected by the configuration |
//! | [`constants`] | Deployment defaults |
//!
//! ### Runtime Support
//! | Module | Description |
//! |--------|-------------|
//! | [`artifacts`] | Temporary files with deferred, cancellable deletion |
//! | [`logging`] | Structured logging with tracing |
//! | [`error_ext`] | Context helpers for foreign errors |

pub mod artifacts;
pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod logging;

// Re-export commonly used types
pub use artifacts::TempArtifactStore;
pub use config::{AppConfig, ConfigLoader};
pub use di::{AppContext, AppServices, init_app};
pub use error_ext::ErrorContext;
