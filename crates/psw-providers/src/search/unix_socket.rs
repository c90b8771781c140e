//! Unix socket search backend
//!
//! Every call connects, writes one frame, half-closes the write side and
//! reads until the daemon closes. The whole exchange, connect included, is
//! bounded by a single timeout.

use crate::constants::{SEARCH_PROVIDER_UNIX_SOCKET, SEARCH_RESPONSE_CAPACITY};
use crate::protocol::{decode_completion_response, decode_search_response, encode_search_request};
use async_trait::async_trait;
use psw_domain::error::{Error, Result};
use psw_domain::ports::providers::SearchBackend;
use psw_domain::value_objects::{HitRecord, NormalizedQuery, Pagination, SearchHits, SearchScope};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::UnixStream;

/// Client of the search daemon's Unix socket
#[derive(Debug, Clone)]
pub struct UnixSocketSearchBackend {
    socket_path: PathBuf,
    timeout: Duration,
    pagination: Pagination,
}

impl UnixSocketSearchBackend {
    /// Create a client for the daemon listening on `socket_path`
    pub fn new(socket_path: impl Into<PathBuf>, timeout: Duration, pagination: Pagination) -> Self {
        Self {
            socket_path: socket_path.into(),
            timeout,
            pagination,
        }
    }

    /// Socket the client connects to
    pub fn socket_path(&self) -> &Path {
        &self.socket_path
    }

    /// Run one bounded request/response exchange
    async fn exchange(&self, frame: &[u8], operation: &str) -> Result<Vec<u8>> {
        tokio::time::timeout(self.timeout, self.exchange_unbounded(frame))
            .await
            .map_err(|_| Error::timeout(operation, self.timeout))?
    }

    async fn exchange_unbounded(&self, frame: &[u8]) -> Result<Vec<u8>> {
        let mut stream = UnixStream::connect(&self.socket_path)
            .await
            .map_err(|e| {
                Error::network_with_source(
                    format!("cannot connect to {}", self.socket_path.display()),
                    e,
                )
            })?;

        stream
            .write_all(frame)
            .await
            .map_err(|e| Error::network_with_source("failed to send search frame", e))?;
        // Half-close: the daemon answers once it sees end of stream
        stream
            .shutdown()
            .await
            .map_err(|e| Error::network_with_source("failed to half-close search socket", e))?;

        let mut body = Vec::with_capacity(SEARCH_RESPONSE_CAPACITY);
        stream
            .read_to_end(&mut body)
            .await
            .map_err(|e| Error::network_with_source("failed to read search response", e))?;
        Ok(body)
    }
}

#[async_trait]
impl SearchBackend for UnixSocketSearchBackend {
    async fn search(
        &self,
        scope: &SearchScope,
        query: &NormalizedQuery,
        page_offset: u64,
    ) -> Result<SearchHits> {
        let frame = encode_search_request(Some(page_offset), scope, query);
        let body = self.exchange(&frame, "search").await?;
        let (hits, total) = decode_search_response(&body)?;

        tracing::debug!(
            socket = %self.socket_path.display(),
            hits = hits.len(),
            total,
            "search response decoded"
        );

        Ok(SearchHits {
            hits,
            total: self.pagination.clamp_total(total),
        })
    }

    async fn complete(
        &self,
        scope: &SearchScope,
        query: &NormalizedQuery,
    ) -> Result<Vec<HitRecord>> {
        let frame = encode_search_request(None, scope, query);
        let body = self.exchange(&frame, "autocomplete").await?;
        Ok(decode_completion_response(&body))
    }

    fn provider_name(&self) -> &str {
        SEARCH_PROVIDER_UNIX_SOCKET
    }
}
