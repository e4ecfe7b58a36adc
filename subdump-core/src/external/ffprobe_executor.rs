//! FFprobe integration for subtitle stream discovery
//!
//! This module provides the trait the stream inspector uses to run ffprobe,
//! and the concrete implementation that spawns the resolved executable. Two
//! invocations are offered: the machine-readable JSON stream listing, and the
//! plain `ffprobe -i` banner used as a fallback.
use crate::error::{CoreResult, command_failed_error, command_start_error};
use crate::external::ToolHandle;
use std::ffi::OsStr;
use std::path::Path;
use std::process::{Output, Stdio};

/// Trait for running ffprobe against a media file.
pub trait FfprobeExecutor {
    /// Returns ffprobe's JSON description of the file's subtitle streams.
    fn probe_json(&self, input_path: &Path) -> CoreResult<String>;

    /// Returns ffprobe's human-readable stream listing, stdout and stderr
    /// combined into one blob.
    fn probe_text(&self, input_path: &Path) -> CoreResult<String>;
}

/// Runs the ffprobe executable held by a [`ToolHandle`].
#[derive(Debug, Clone)]
pub struct CommandFfprobeExecutor {
    handle: ToolHandle,
}

impl CommandFfprobeExecutor {
    pub fn new(handle: ToolHandle) -> Self {
        Self { handle }
    }

    fn run(&self, args: &[&OsStr], context: &str) -> CoreResult<Output> {
        let command_name = format!("{} ({})", self.handle.name, context);
        let mut cmd = self.handle.command();
        cmd.args(args).stdin(Stdio::null());
        log::debug!("Running ffprobe command: {:?}", cmd);

        let output = cmd
            .output()
            .map_err(|e| command_start_error(&command_name, e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            log::error!("{} failed with {}: {}", command_name, output.status, stderr);
            return Err(command_failed_error(command_name, output.status, stderr));
        }
        Ok(output)
    }
}

impl FfprobeExecutor for CommandFfprobeExecutor {
    fn probe_json(&self, input_path: &Path) -> CoreResult<String> {
        let output = self.run(
            &[
                OsStr::new("-v"),
                OsStr::new("error"),
                OsStr::new("-print_format"),
                OsStr::new("json"),
                OsStr::new("-show_streams"),
                OsStr::new("-select_streams"),
                OsStr::new("s"),
                input_path.as_os_str(),
            ],
            "json",
        )?;
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn probe_text(&self, input_path: &Path) -> CoreResult<String> {
        let output = self.run(&[OsStr::new("-i"), input_path.as_os_str()], "text")?;
        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));
        Ok(combined)
    }
}
