//! Use Case Implementations

pub mod autocomplete_service;
pub mod catalog_service;
pub mod download_service;
pub mod search_service;

pub use autocomplete_service::AutocompleteServiceImpl;
pub use catalog_service::CatalogServiceImpl;
pub use download_service::DownloadServiceImpl;
pub use search_service::SearchServiceImpl;
