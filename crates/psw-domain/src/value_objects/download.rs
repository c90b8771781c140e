//! Download and slice request value objects

use crate::constants::{CAPTURE_FILE_EXTENSION, INDEX_FILE_SUFFIX};
use crate::error::{Error, Result};
use crate::value_objects::{PathComponent, RenderKind};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// A validated `/download` request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    /// Service directory the capture lives in
    pub service: PathComponent,
    /// Capture file name
    pub filename: PathComponent,
    /// Requested rendering
    pub kind: RenderKind,
    /// Offset of the match selecting the flow; required unless passthrough
    pub offset: Option<u64>,
}

impl DownloadRequest {
    /// Validate raw query parameters
    ///
    /// Fails with [`Error::InvalidArgument`] when `filename` or `type` is
    /// missing, the type is unknown, the names are not single path
    /// components, or the type needs an offset that is missing or not a
    /// number.
    pub fn from_params(
        filename: Option<&str>,
        offset: Option<&str>,
        kind: Option<&str>,
        service: Option<&str>,
    ) -> Result<Self> {
        let (Some(filename), Some(kind)) = (filename, kind) else {
            return Err(Error::invalid_argument(
                "both 'filename' and 'type' are required",
            ));
        };
        let kind: RenderKind = kind.parse()?;
        let filename = PathComponent::parse(filename)?;
        let service = match service {
            Some(service) => PathComponent::parse(service)?,
            None => PathComponent::default_service(),
        };

        // Passthrough downloads ignore any offset they are given
        let offset = if kind.requires_offset() {
            let Some(raw) = offset else {
                return Err(Error::invalid_argument(format!(
                    "type '{kind}' requires an offset"
                )));
            };
            Some(raw.trim().parse::<u64>().map_err(|_| {
                Error::invalid_argument(format!("offset '{raw}' is not a byte offset"))
            })?)
        } else {
            None
        };

        Ok(Self {
            service,
            filename,
            kind,
            offset,
        })
    }

    /// File name offered to the browser
    ///
    /// Whole captures keep their name; pcap slices are named
    /// `<capture>@<offset>.cap`.
    pub fn attachment_name(&self) -> String {
        let name = self.filename.as_str();
        match (self.kind, self.offset) {
            (RenderKind::Pcap, Some(offset)) => {
                let stem = name.strip_suffix(CAPTURE_FILE_EXTENSION).unwrap_or(name);
                format!("{stem}@{offset}{CAPTURE_FILE_EXTENSION}")
            }
            _ => name.to_string(),
        }
    }
}

/// A request for the slicer to render the flow around an offset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliceRequest {
    /// Capture file the flow comes from
    pub source: PathBuf,
    /// Offset selecting the flow
    pub offset: u64,
    /// Requested rendering
    pub kind: RenderKind,
}

impl SliceRequest {
    /// Create a slice request for `source`
    pub fn new(source: impl Into<PathBuf>, offset: u64, kind: RenderKind) -> Self {
        Self {
            source: source.into(),
            offset,
            kind,
        }
    }

    /// Index file the indexer built next to the capture
    pub fn index_path(&self) -> PathBuf {
        index_path_for(&self.source)
    }
}

/// Index path of a capture: the capture path with `.ap` appended
pub fn index_path_for(source: &Path) -> PathBuf {
    let mut path = OsString::from(source.as_os_str());
    path.push(INDEX_FILE_SUFFIX);
    PathBuf::from(path)
}

/// What the slicer reported after running
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SliceOutput {
    /// Exit code, `None` when killed by a signal
    pub exit_code: Option<i32>,
    /// Captured standard output
    pub stdout: Vec<u8>,
}

impl SliceOutput {
    /// Whether the slicer exited with status zero
    pub fn succeeded(&self) -> bool {
        self.exit_code == Some(0)
    }
}
