//! Render kinds of the download endpoint

use crate::constants::{PCAP_CONTENT_TYPE, PYTHON_CONTENT_TYPE, TEXT_CONTENT_TYPE};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a capture, or the flow around an offset, is rendered for download
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderKind {
    /// The whole capture file, unchanged
    All,
    /// The packets of one flow, as a pcap file
    Pcap,
    /// Flow payloads as plain text
    Str,
    /// Flow payloads as a hex dump
    Hex,
    /// Flow payloads as escaped literals
    Repr,
    /// A replay script of the flow
    PythonSimple,
    /// A replay script of the flow with per-peer diffing
    PythonDiff,
}

impl RenderKind {
    /// Every kind, in the order the UI lists them
    pub const ALL: [RenderKind; 7] = [
        Self::All,
        Self::Pcap,
        Self::Str,
        Self::Hex,
        Self::Repr,
        Self::PythonSimple,
        Self::PythonDiff,
    ];

    /// Name used in the query string and passed to the slicer
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Pcap => "pcap",
            Self::Str => "str",
            Self::Hex => "hex",
            Self::Repr => "repr",
            Self::PythonSimple => "pythonsimple",
            Self::PythonDiff => "pythondiff",
        }
    }

    /// Whether the kind needs an offset to pick the flow
    pub fn requires_offset(self) -> bool {
        !matches!(self, Self::All)
    }

    /// Whether the kind is served straight from the capture file
    pub fn is_passthrough(self) -> bool {
        matches!(self, Self::All)
    }

    /// Response content type
    pub fn content_type(self) -> &'static str {
        match self {
            Self::All | Self::Pcap => PCAP_CONTENT_TYPE,
            Self::Str | Self::Hex | Self::Repr => TEXT_CONTENT_TYPE,
            Self::PythonSimple | Self::PythonDiff => PYTHON_CONTENT_TYPE,
        }
    }

    /// Whether the response carries capture bytes and is sent as an attachment
    pub fn is_capture(self) -> bool {
        matches!(self, Self::All | Self::Pcap)
    }
}

impl fmt::Display for RenderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RenderKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| Error::invalid_argument(format!("unknown render type '{s}'")))
    }
}
