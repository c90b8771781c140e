//! Application Layer - pcap-search-web
//!
//! Use cases behind the HTTP endpoints. Each one takes already validated
//! request values, drives the backend ports and shapes the result.
//!
//! ## Use Cases
//!
//! | Use case | Endpoint |
//! |----------|----------|
//! | [`SearchServiceImpl`] | `/api/search` |
//! | [`AutocompleteServiceImpl`] | `/api/autocomplete` |
//! | [`DownloadServiceImpl`] | `/download` |
//! | [`CatalogServiceImpl`] | `/api/list` |
//!
//! Backend trouble never surfaces as an error here: the search-like use
//! cases report a [`BackendOutcome`](psw_domain::value_objects::BackendOutcome)
//! and leave it to the HTTP layer to answer with an empty payload.
//!
//! ## Dependencies
//!
//! This crate depends only on `psw-domain` and the async runtime.

pub mod ports;
pub mod use_cases;

pub use ports::*;
pub use use_cases::*;
