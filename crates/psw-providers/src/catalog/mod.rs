//! Service Catalog Implementations

pub mod filesystem;

pub use filesystem::FilesystemServiceCatalog;
