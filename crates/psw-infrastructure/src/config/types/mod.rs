//! Configuration types module

pub mod app;
pub mod backend;
pub mod logging;
pub mod server;

pub use app::AppConfig;
pub use backend::{
    AutocompleteConfig, BackendConfig, FlowConfig, FlowMode, SearchConfig, SlicerConfig,
};
pub use logging::LoggingConfig;
pub use server::ServerConfig;
