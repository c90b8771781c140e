//! Slicer subprocess
//!
//! The slicing program takes five positional arguments:
//!
//! ```text
//! <index file> <offset> <render kind> <capture file> <destination>
//! ```
//!
//! and writes the rendering to the destination. For the `loc` kind the
//! destination is stdout and the program prints the byte span of the flow.

use crate::constants::SLICER_LOCATE_DESTINATION;
use crate::protocol::decode_locate_output;
use async_trait::async_trait;
use psw_domain::constants::SLICER_LOCATE_KIND;
use psw_domain::error::{Error, Result};
use psw_domain::ports::providers::PcapSlicer;
use psw_domain::value_objects::{FlowSpan, SliceOutput, SliceRequest, index_path_for};
use std::ffi::OsString;
use std::path::Path;
use std::process::{Output, Stdio};
use std::time::Duration;
use tokio::process::Command;

/// Slicer backed by an external program
#[derive(Debug, Clone)]
pub struct SubprocessPcapSlicer {
    command: Vec<String>,
    timeout: Duration,
}

impl SubprocessPcapSlicer {
    /// Create a slicer running `command` (program followed by fixed arguments)
    pub fn new(command: Vec<String>, timeout: Duration) -> Self {
        Self { command, timeout }
    }

    /// Run the program with the five slicer arguments appended
    async fn run(&self, slice_args: [OsString; 5]) -> Result<Output> {
        let Some((program, fixed_args)) = self.command.split_first() else {
            return Err(Error::configuration("slicer command is empty"));
        };

        let child = Command::new(program)
            .args(fixed_args)
            .args(&slice_args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output();

        // Dropping `child` on timeout kills the process
        let output = tokio::time::timeout(self.timeout, child)
            .await
            .map_err(|_| Error::timeout(format!("slicer {program}"), self.timeout))?
            .map_err(|e| Error::subprocess_with_source(format!("cannot run {program}"), e))?;

        if !output.status.success() {
            tracing::warn!(
                program = %program,
                status = %output.status,
                stderr = %String::from_utf8_lossy(&output.stderr).trim_end(),
                "slicer exited unsuccessfully"
            );
        }
        Ok(output)
    }
}

#[async_trait]
impl PcapSlicer for SubprocessPcapSlicer {
    async fn slice(&self, request: &SliceRequest, destination: &Path) -> Result<SliceOutput> {
        let output = self
            .run([
                request.index_path().into_os_string(),
                request.offset.to_string().into(),
                request.kind.as_str().into(),
                request.source.clone().into_os_string(),
                destination.as_os_str().to_owned(),
            ])
            .await?;

        Ok(SliceOutput {
            exit_code: output.status.code(),
            stdout: output.stdout,
        })
    }

    async fn locate(&self, source: &Path, offset: u64) -> Result<Option<FlowSpan>> {
        let output = self
            .run([
                index_path_for(source).into_os_string(),
                offset.to_string().into(),
                SLICER_LOCATE_KIND.into(),
                source.as_os_str().to_owned(),
                SLICER_LOCATE_DESTINATION.into(),
            ])
            .await?;

        if !output.status.success() {
            return Err(Error::subprocess(format!(
                "slicer could not locate offset {offset} in {}",
                source.display()
            )));
        }
        Ok(decode_locate_output(&output.stdout))
    }
}
