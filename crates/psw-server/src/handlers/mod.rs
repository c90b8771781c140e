//! HTTP handlers
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | `/api/search` | GET | One page of enriched hits grouped by capture |
//! | `/api/autocomplete` | GET | Suggestions for a query prefix |
//! | `/api/list` | GET | Service directory names |
//! | `/download` | GET | A capture or a rendering of one of its flows |

pub mod autocomplete;
pub mod catalog;
pub mod download;
pub mod error;
pub mod search;

pub use error::{ErrorResponse, HandlerError};
