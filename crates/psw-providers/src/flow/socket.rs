//! Flow daemon socket lookup

use crate::constants::{FLOW_PROVIDER_SOCKET, FLOW_RESPONSE_CAPACITY};
use crate::protocol::{decode_flow_response, encode_flow_request};
use async_trait::async_trait;
use psw_domain::error::{Error, Result};
use psw_domain::ports::providers::{FlowLookup, FlowSession};
use psw_domain::value_objects::{FlowKey, FlowMetadata};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::UnixStream;

/// Lookup against the flow daemon's Unix socket
#[derive(Debug, Clone)]
pub struct SocketFlowLookup {
    socket_path: Arc<PathBuf>,
}

impl SocketFlowLookup {
    /// Create a lookup for the daemon listening on `socket_path`
    pub fn new(socket_path: impl Into<PathBuf>) -> Self {
        Self {
            socket_path: Arc::new(socket_path.into()),
        }
    }
}

#[async_trait]
impl FlowLookup for SocketFlowLookup {
    async fn open_session(&self) -> Result<Box<dyn FlowSession>> {
        Ok(Box::new(SocketFlowSession {
            socket_path: Arc::clone(&self.socket_path),
        }))
    }

    fn provider_name(&self) -> &str {
        FLOW_PROVIDER_SOCKET
    }
}

/// Connections are made per hit, so the session only remembers where to go
struct SocketFlowSession {
    socket_path: Arc<PathBuf>,
}

#[async_trait]
impl FlowSession for SocketFlowSession {
    async fn lookup(&mut self, key: &FlowKey) -> Result<FlowMetadata> {
        let mut stream = UnixStream::connect(self.socket_path.as_path())
            .await
            .map_err(|e| {
                Error::network_with_source(
                    format!("cannot connect to {}", self.socket_path.display()),
                    e,
                )
            })?;

        stream
            .write_all(&encode_flow_request(key))
            .await
            .map_err(|e| Error::network_with_source("failed to send flow request", e))?;
        stream
            .shutdown()
            .await
            .map_err(|e| Error::network_with_source("failed to half-close flow socket", e))?;

        let mut body = Vec::with_capacity(FLOW_RESPONSE_CAPACITY);
        stream
            .read_to_end(&mut body)
            .await
            .map_err(|e| Error::network_with_source("failed to read flow response", e))?;

        decode_flow_response(&body)
    }
}
