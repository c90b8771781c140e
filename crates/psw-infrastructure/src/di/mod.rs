//! Composition root
//!
//! Turns an [`AppConfig`](crate::config::AppConfig) into concrete adapters
//! and hands the HTTP layer one trait object per use case.
//!
//! ```text
//! AppConfig → providers (sockets, helpers, catalog) → use cases → AppServices
//!                                   ↑
//!                          TempArtifactStore
//! ```

pub mod bootstrap;

pub use bootstrap::{AppContext, AppServices, init_app};
