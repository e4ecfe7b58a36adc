// ============================================================================
// subdump-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Interactions with ffprobe and ffmpeg
//
// This module encapsulates interactions with the two external command-line
// tools the hook depends on. The tools are located once on the search path
// and the resulting handles are passed to every component that spawns them,
// so each invocation runs exactly the binary that was logged at startup.
//
// KEY COMPONENTS:
// - ToolHandle / Toolchain: Resolved executables with version information
// - locate_tool / locate_toolchain: PATH lookup via the `which` crate
// - Traits for external tool interactions (FfmpegSpawner, FfprobeExecutor)
// - Concrete implementations using std::process and ffmpeg-sidecar
//
// DESIGN PHILOSOPHY:
// This module follows the dependency injection pattern, allowing consumers to
// provide their own implementations of the traits for testing.
//
// AI-ASSISTANT-INFO: External tool discovery and execution abstractions

// ---- Internal crate imports ----
use crate::config::CoreConfig;
use crate::error::{CoreError, CoreResult, command_failed_error, command_start_error};

// ---- Standard library imports ----
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

// ============================================================================
// SUBMODULES
// ============================================================================

/// Contains traits and implementations for executing ffmpeg commands
pub mod ffmpeg_executor;

/// Contains traits and implementations for executing ffprobe commands
pub mod ffprobe_executor;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use ffmpeg_executor::{FfmpegProcess, FfmpegSpawner, SidecarProcess, SidecarSpawner};
pub use ffprobe_executor::{CommandFfprobeExecutor, FfprobeExecutor};

// ============================================================================
// TOOL HANDLES
// ============================================================================

/// A resolved external executable.
///
/// Produced once by [`locate_tool`] and then handed to whatever needs to run
/// the tool, so the lookup is never repeated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolHandle {
    /// The name the tool was looked up by (e.g. "ffprobe")
    pub name: String,
    /// Absolute path of the executable
    pub path: PathBuf,
    /// First line of `<tool> -version`, if it could be read
    pub version: Option<String>,
}

impl ToolHandle {
    /// Creates a handle for an already-known executable path.
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            version: None,
        }
    }

    /// Returns a `Command` for this executable.
    pub fn command(&self) -> Command {
        Command::new(&self.path)
    }
}

/// The prober and transcoder used for one hook run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolchain {
    pub ffprobe: ToolHandle,
    pub ffmpeg: ToolHandle,
}

// ============================================================================
// DEPENDENCY CHECKING
// ============================================================================

/// Resolves `name` on the executable search path.
///
/// A failed lookup is fatal for the run and reported as
/// `CoreError::DependencyNotFound`. Reading the version afterwards is best
/// effort: a failure is logged and leaves `version` empty.
pub fn locate_tool(name: &str) -> CoreResult<ToolHandle> {
    let path = which::which(name).map_err(|e| {
        log::error!("Error looking for {}: error={}", name, e);
        CoreError::DependencyNotFound {
            tool: name.to_string(),
            source: e,
        }
    })?;
    log::info!("Found {}: path={}", name, path.display());

    let version = match tool_version(&path) {
        Ok(version) => {
            log::debug!("{} version: {}", name, version);
            Some(version)
        }
        Err(e) => {
            log::warn!("Could not read {} version: {}", name, e);
            None
        }
    };

    Ok(ToolHandle {
        name: name.to_string(),
        path,
        version,
    })
}

/// Resolves both tools named by the configuration, prober first.
pub fn locate_toolchain(config: &CoreConfig) -> CoreResult<Toolchain> {
    Ok(Toolchain {
        ffprobe: locate_tool(&config.ffprobe_name)?,
        ffmpeg: locate_tool(&config.ffmpeg_name)?,
    })
}

/// Runs `<path> -version` and returns the first line of its output.
pub fn tool_version(path: &Path) -> CoreResult<String> {
    let command_name = path.display().to_string();
    let output = Command::new(path)
        .arg("-version")
        .stdin(Stdio::null())
        .output()
        .map_err(|e| command_start_error(&command_name, e))?;

    if !output.status.success() {
        return Err(command_failed_error(
            command_name,
            output.status,
            String::from_utf8_lossy(&output.stderr).trim().to_string(),
        ));
    }

    Ok(String::from_utf8_lossy(&output.stdout)
        .lines()
        .next()
        .unwrap_or_default()
        .trim()
        .to_string())
}
