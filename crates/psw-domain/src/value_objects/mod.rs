//! Domain Value Objects
//!
//! Immutable value objects created per request and never persisted.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`NormalizedQuery`] | Query in the daemon's canonical escape form |
//! | [`SearchScope`] | Lexicographic path range a search is restricted to |
//! | [`HitRecord`] | One match reported by the search daemon |
//! | [`EnrichedHit`] | A hit joined with its flow metadata |
//! | [`ResultPage`] | Enriched hits grouped by capture file |
//! | [`SuggestionList`] | Autocomplete payload |
//! | [`RenderKind`] | Closed set of download renderings |
//! | [`DownloadRequest`] | Validated download parameters |
//! | [`BackendOutcome`] | Success / empty / failed result of a backend call |

/// Download and slice requests
pub mod download;
/// Hit records and flow metadata
pub mod hit;
/// Backend outcomes
pub mod outcome;
/// Pagination and result pages
pub mod page;
/// Query normalization
pub mod query;
/// Download render kinds
pub mod render;
/// Search scopes and path components
pub mod scope;
/// Autocomplete suggestions
pub mod suggestion;

pub use download::{DownloadRequest, SliceOutput, SliceRequest, index_path_for};
pub use hit::{EnrichedHit, FlowKey, FlowMetadata, HitDetail, HitRecord, strip_index_suffix};
pub use outcome::{BackendOutcome, FailureReason};
pub use page::{Pagination, ResultPage, SearchHits};
pub use query::{NormalizedQuery, normalize};
pub use render::RenderKind;
pub use scope::{PathComponent, SearchScope, ServiceSelector};
pub use suggestion::{
    AutocompleteMode, FlowSpan, SuggestionList, SuggestionSet, derive_suggestion,
};
