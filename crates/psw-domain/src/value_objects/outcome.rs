//! Backend outcome value objects
//!
//! Every backend call made on behalf of a page ends in one of three states.
//! The HTTP layer shows the same empty page for `Empty` and `Failed`, but the
//! distinction is kept up to that point so it can be logged and tested.

use crate::error::Error;
use std::fmt;

/// Why a backend call produced nothing usable
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    /// The call exceeded its time bound
    Timeout,
    /// The backend could not be reached or hung up
    Connection(String),
    /// The backend answered with something undecodable
    Malformed(String),
    /// A helper program failed
    Subprocess(String),
    /// Anything else
    Other(String),
}

impl From<&Error> for FailureReason {
    fn from(error: &Error) -> Self {
        match error {
            Error::Timeout { .. } => Self::Timeout,
            Error::Network { .. } | Error::IoSimple { .. } | Error::Io { .. } => {
                Self::Connection(error.to_string())
            }
            Error::Protocol { .. } | Error::Utf8(_) | Error::Json { .. } => {
                Self::Malformed(error.to_string())
            }
            Error::Subprocess { .. } => Self::Subprocess(error.to_string()),
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Timeout => f.write_str("timed out"),
            Self::Connection(detail) => write!(f, "connection failed: {detail}"),
            Self::Malformed(detail) => write!(f, "malformed response: {detail}"),
            Self::Subprocess(detail) => write!(f, "subprocess failed: {detail}"),
            Self::Other(detail) => f.write_str(detail),
        }
    }
}

/// Result of a fail-soft backend operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendOutcome<T> {
    /// The backend produced a non-empty result
    Success(T),
    /// The backend answered but had nothing to report
    Empty,
    /// The backend could not produce a result
    Failed(FailureReason),
}

impl<T> BackendOutcome<T> {
    /// Classify a value, treating `is_empty` values as [`BackendOutcome::Empty`]
    pub fn from_value(value: T, is_empty: impl FnOnce(&T) -> bool) -> Self {
        if is_empty(&value) {
            Self::Empty
        } else {
            Self::Success(value)
        }
    }

    /// Record a failed call
    pub fn failed(error: &Error) -> Self {
        Self::Failed(FailureReason::from(error))
    }

    /// Whether the outcome carries a value
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// The failure reason, if the call failed
    pub fn failure(&self) -> Option<&FailureReason> {
        match self {
            Self::Failed(reason) => Some(reason),
            _ => None,
        }
    }

    /// Transform the carried value
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> BackendOutcome<U> {
        match self {
            Self::Success(value) => BackendOutcome::Success(f(value)),
            Self::Empty => BackendOutcome::Empty,
            Self::Failed(reason) => BackendOutcome::Failed(reason),
        }
    }

    /// The carried value, or `fallback()` for empty and failed outcomes
    pub fn unwrap_or_else(self, fallback: impl FnOnce() -> T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Empty | Self::Failed(_) => fallback(),
        }
    }
}
