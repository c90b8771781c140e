//! Application ports
//!
//! Interfaces the HTTP layer is written against.

pub mod services;

pub use services::{
    AutocompleteServiceInterface, CatalogServiceInterface, DownloadServiceInterface,
    PreparedDownload, SearchServiceInterface,
};
