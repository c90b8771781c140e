//! # Domain Layer
//!
//! Core types of the pcap search front end: the canonical query form, hit
//! records and their enrichment, result pages, autocomplete suggestions,
//! download render kinds, and the ports through which the external search,
//! flow and slicing processes are reached.
//!
//! This crate performs no I/O. Adapters implementing the ports live in
//! `psw-providers` and `psw-infrastructure`.
//!
//! ## Module Categories
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`value_objects`] | Per-request immutable values |
//! | [`ports`] | Traits for backend access |
//! | [`error`] | Error type shared by all layers |
//! | [`constants`] | Wire and pagination constants |

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
