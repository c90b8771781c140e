//! Context helper subprocess lookup
//!
//! The helper reads one request line on stdin and answers one line on
//! stdout, so a session writes a request and reads its answer before the
//! next hit is looked up. The process is killed when the session is dropped,
//! and replaced when a lookup was abandoned before its answer arrived.

use crate::constants::FLOW_PROVIDER_SUBPROCESS;
use crate::protocol::{decode_flow_line, encode_flow_line};
use async_trait::async_trait;
use psw_domain::error::{Error, Result};
use psw_domain::ports::providers::{FlowLookup, FlowSession};
use psw_domain::value_objects::{FlowKey, FlowMetadata};
use std::process::Stdio;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::process::{Child, ChildStdin, ChildStdout, Command};
use tracing::{debug, warn};

/// Lookup through a long-running context helper
#[derive(Debug, Clone)]
pub struct SubprocessFlowLookup {
    command: Vec<String>,
}

impl SubprocessFlowLookup {
    /// Create a lookup running `command` (program followed by its arguments)
    pub fn new(command: Vec<String>) -> Self {
        Self { command }
    }
}

#[async_trait]
impl FlowLookup for SubprocessFlowLookup {
    async fn open_session(&self) -> Result<Box<dyn FlowSession>> {
        let helper = HelperProcess::spawn(&self.command)?;
        Ok(Box::new(SubprocessFlowSession {
            command: self.command.clone(),
            helper,
            in_flight: false,
        }))
    }

    fn provider_name(&self) -> &str {
        FLOW_PROVIDER_SUBPROCESS
    }
}

/// A running helper; dropping it kills the process
struct HelperProcess {
    // Held for kill-on-drop
    _child: Child,
    stdin: ChildStdin,
    stdout: BufReader<ChildStdout>,
}

impl HelperProcess {
    fn spawn(command: &[String]) -> Result<Self> {
        let Some((program, args)) = command.split_first() else {
            return Err(Error::configuration("context helper command is empty"));
        };

        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| Error::subprocess_with_source(format!("cannot start {program}"), e))?;

        let (Some(stdin), Some(stdout)) = (child.stdin.take(), child.stdout.take()) else {
            return Err(Error::subprocess("context helper pipes unavailable"));
        };

        debug!(program = %program, pid = ?child.id(), "context helper started");
        Ok(Self {
            _child: child,
            stdin,
            stdout: BufReader::new(stdout),
        })
    }
}

struct SubprocessFlowSession {
    command: Vec<String>,
    helper: HelperProcess,
    /// Set while a request has been written but its answer not yet read.
    /// A lookup abandoned mid-way leaves it set; the next lookup then
    /// replaces the helper, whose pending answer would be misread.
    in_flight: bool,
}

#[async_trait]
impl FlowSession for SubprocessFlowSession {
    async fn lookup(&mut self, key: &FlowKey) -> Result<FlowMetadata> {
        if self.in_flight {
            warn!(
                offset = key.offset,
                "context helper abandoned mid-lookup, restarting it"
            );
            self.helper = HelperProcess::spawn(&self.command)?;
            self.in_flight = false;
        }
        self.in_flight = true;

        let helper = &mut self.helper;
        helper
            .stdin
            .write_all(&encode_flow_line(key))
            .await
            .map_err(|e| Error::subprocess_with_source("failed to write to context helper", e))?;
        helper
            .stdin
            .flush()
            .await
            .map_err(|e| Error::subprocess_with_source("failed to flush context helper", e))?;

        let mut line = Vec::new();
        let read = helper
            .stdout
            .read_until(b'\n', &mut line)
            .await
            .map_err(|e| Error::subprocess_with_source("failed to read from context helper", e))?;
        if read == 0 {
            return Err(Error::subprocess("context helper closed its output"));
        }
        self.in_flight = false;

        decode_flow_line(&String::from_utf8_lossy(&line), key.offset)
    }
}
