//! Hit-Related Value Objects
//!
//! Records returned by the search daemon and the flow metadata that
//! enriches them before they are shown to the analyst.

use crate::constants::INDEX_FILE_SUFFIX;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

/// Third field of a daemon hit line
///
/// Search responses carry the matched length, autocomplete responses carry
/// the escaped bytes following the match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HitDetail {
    /// Length of the matched pattern in bytes
    Length(u64),
    /// Escaped context starting at the match
    Context(String),
}

/// Value Object: Raw Search Hit
///
/// One match reported by the search daemon. `path` is the index file the
/// match was found in (a capture path with the `.ap` suffix), decoded for
/// display; the daemon's exact bytes are kept for keys sent back to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HitRecord {
    /// Index file path as reported by the daemon, lossily decoded
    pub path: String,
    /// Byte offset of the match inside the index file
    pub offset: u64,
    /// Matched length or context, depending on the request kind
    pub detail: HitDetail,
    raw_path: Vec<u8>,
}

impl HitRecord {
    /// A hit in a file whose path is valid UTF-8
    pub fn new(path: impl Into<String>, offset: u64, detail: HitDetail) -> Self {
        let path = path.into();
        Self {
            raw_path: path.clone().into_bytes(),
            path,
            offset,
            detail,
        }
    }

    /// A hit whose path is taken as the daemon sent it
    pub fn from_raw_path(raw_path: &[u8], offset: u64, detail: HitDetail) -> Self {
        Self {
            path: String::from_utf8_lossy(raw_path).into_owned(),
            offset,
            detail,
            raw_path: raw_path.to_vec(),
        }
    }

    /// A completion line that carried only a suggestion, without a location
    pub fn bare(context: impl Into<String>) -> Self {
        Self::new(String::new(), 0, HitDetail::Context(context.into()))
    }

    /// Whether the record has no location, see [`HitRecord::bare`]
    pub fn is_bare(&self) -> bool {
        self.path.is_empty()
    }

    /// Path bytes exactly as the daemon reported them
    pub fn raw_path(&self) -> &[u8] {
        &self.raw_path
    }

    /// Matched length, for search hits
    pub fn length(&self) -> Option<u64> {
        match self.detail {
            HitDetail::Length(len) => Some(len),
            HitDetail::Context(_) => None,
        }
    }

    /// Context snippet, for autocomplete hits
    pub fn context(&self) -> Option<&str> {
        match &self.detail {
            HitDetail::Context(context) => Some(context),
            HitDetail::Length(_) => None,
        }
    }

    /// Path of the capture the index file was built from
    pub fn capture_path(&self) -> &str {
        strip_index_suffix(&self.path)
    }

    /// Capture path on disk, byte-exact
    pub fn capture_fs_path(&self) -> &Path {
        let raw = self
            .raw_path
            .strip_suffix(INDEX_FILE_SUFFIX.as_bytes())
            .unwrap_or(self.raw_path.as_slice());
        Path::new(OsStr::from_bytes(raw))
    }

    /// Display name used to group hits: the capture's file name
    pub fn file_name(&self) -> &str {
        let capture = self.capture_path();
        capture.rsplit('/').next().unwrap_or(capture)
    }
}

/// Remove the indexer's `.ap` suffix, when present
pub fn strip_index_suffix(path: &str) -> &str {
    path.strip_suffix(INDEX_FILE_SUFFIX).unwrap_or(path)
}

/// Key of a flow metadata lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowKey {
    /// Index file path, byte for byte as reported by the search daemon
    pub path: Vec<u8>,
    /// Byte offset of the match
    pub offset: u64,
    /// Matched length in bytes
    pub length: u64,
}

impl FlowKey {
    /// Build the lookup key of a search hit
    ///
    /// Autocomplete hits carry no length and therefore have no key.
    pub fn from_hit(hit: &HitRecord) -> Option<Self> {
        Some(Self {
            path: hit.raw_path().to_vec(),
            offset: hit.offset,
            length: hit.length()?,
        })
    }
}

/// Flow metadata returned for one hit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowMetadata {
    /// Capture time of the flow in seconds since the epoch; negative means unknown
    pub epoch: i64,
    /// Server-side port
    pub port0: u16,
    /// Client-side port
    pub port1: u16,
    /// Rendered context around the match
    pub context: String,
}

impl FlowMetadata {
    /// Whether the metadata may be shown; hits failing this are dropped
    pub fn is_usable(&self) -> bool {
        self.epoch >= 0 && !self.context.is_empty()
    }
}

/// Value Object: Enriched Hit
///
/// A search hit joined with its flow metadata, as serialized to the browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedHit {
    /// Byte offset of the match
    pub offset: u64,
    /// Capture time of the flow
    pub epoch: i64,
    /// Server-side port
    pub port0: u16,
    /// Client-side port
    pub port1: u16,
    /// Rendered context around the match
    pub context: String,
}

impl EnrichedHit {
    /// Join a hit with its metadata
    pub fn new(hit: &HitRecord, metadata: FlowMetadata) -> Self {
        Self {
            offset: hit.offset,
            epoch: metadata.epoch,
            port0: metadata.port0,
            port1: metadata.port1,
            context: metadata.context,
        }
    }
}
