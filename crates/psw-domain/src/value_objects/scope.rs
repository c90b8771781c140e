//! Search scope and path component value objects

use crate::constants::{DEFAULT_SERVICE, SCOPE_LOWER_SENTINEL, SCOPE_UPPER_SENTINEL};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Value Object: Single Path Component
///
/// A user-supplied file or directory name that is safe to join under a
/// configured root. Rejects separators, NUL bytes and the `.`/`..` entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PathComponent(String);

impl PathComponent {
    /// Validate a user-supplied name
    pub fn parse(name: &str) -> Result<Self> {
        if name.is_empty() {
            return Err(Error::invalid_argument("path component is empty"));
        }
        if name == "." || name == ".." {
            return Err(Error::invalid_argument(format!(
                "path component '{name}' is not allowed"
            )));
        }
        if name.contains(['/', '\0']) {
            return Err(Error::invalid_argument(format!(
                "path component '{}' contains a separator",
                name.escape_debug()
            )));
        }
        Ok(Self(name.to_string()))
    }

    /// The default service selector
    pub fn default_service() -> Self {
        Self(DEFAULT_SERVICE.to_string())
    }

    /// The validated name
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PathComponent {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<PathComponent> for String {
    fn from(value: PathComponent) -> Self {
        value.0
    }
}

impl fmt::Display for PathComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Value Object: Search Scope
///
/// A lexicographic range of indexed file paths the daemon is allowed to
/// search. A directory scope brackets every file directly under the
/// directory by appending the lowest and highest sentinel bytes.
///
/// ## Example
///
/// ```rust
/// use psw_domain::value_objects::{PathComponent, SearchScope};
///
/// let service = PathComponent::parse("web").unwrap();
/// let scope = SearchScope::for_service("/tmp/pcap", &service);
/// assert_eq!(scope.lower(), "/tmp/pcap/web/\u{1}");
/// assert_eq!(scope.upper(), "/tmp/pcap/web/\u{7f}");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchScope {
    lower: String,
    upper: String,
}

impl SearchScope {
    /// A scope that admits every indexed file
    pub fn unrestricted() -> Self {
        Self {
            lower: SCOPE_LOWER_SENTINEL.to_string(),
            upper: SCOPE_UPPER_SENTINEL.to_string(),
        }
    }

    /// A scope covering the files of one service directory under `root`
    pub fn for_service(root: &str, service: &PathComponent) -> Self {
        let prefix = format!("{}/{}/", root.trim_end_matches('/'), service.as_str());
        Self {
            lower: format!("{prefix}{SCOPE_LOWER_SENTINEL}"),
            upper: format!("{prefix}{SCOPE_UPPER_SENTINEL}"),
        }
    }

    /// Lower path bound (inclusive)
    pub fn lower(&self) -> &str {
        &self.lower
    }

    /// Upper path bound (inclusive)
    pub fn upper(&self) -> &str {
        &self.upper
    }

    /// Whether `path` falls inside the scope
    pub fn contains(&self, path: &str) -> bool {
        self.lower.as_str() <= path && path <= self.upper.as_str()
    }
}

impl Default for SearchScope {
    fn default() -> Self {
        Self::unrestricted()
    }
}

/// Which part of the capture tree a search may look at
///
/// An absent `service` parameter selects the default service directory, an
/// empty one lifts the restriction altogether.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceSelector {
    /// One service directory
    Service(PathComponent),
    /// Every indexed file
    Unrestricted,
}

impl ServiceSelector {
    /// Interpret the raw `service` query parameter
    pub fn from_param(service: Option<&str>) -> Result<Self> {
        match service {
            None => Ok(Self::Service(PathComponent::default_service())),
            Some("") => Ok(Self::Unrestricted),
            Some(name) => PathComponent::parse(name).map(Self::Service),
        }
    }

    /// Scope bounds for a capture tree rooted at `root`
    pub fn scope(&self, root: &str) -> SearchScope {
        match self {
            Self::Service(service) => SearchScope::for_service(root, service),
            Self::Unrestricted => SearchScope::unrestricted(),
        }
    }
}

impl Default for ServiceSelector {
    fn default() -> Self {
        Self::Service(PathComponent::default_service())
    }
}
