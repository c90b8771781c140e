//! Server configuration types

use crate::constants::{DEFAULT_HTTP_PORT, DEFAULT_SERVER_HOST, DEFAULT_STATIC_DIR};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,

    /// Listen port
    pub port: u16,

    /// Directory holding `index.html`; the entry page is not served when unset
    pub static_dir: Option<PathBuf>,

    /// Send `Access-Control-Allow-Origin: *` on every response
    pub cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_SERVER_HOST.to_string(),
            port: DEFAULT_HTTP_PORT,
            static_dir: Some(PathBuf::from(DEFAULT_STATIC_DIR)),
            cors: true,
        }
    }
}
