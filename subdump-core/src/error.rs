// ============================================================================
// subdump-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Core Error Types and Helpers
//
// This module defines the error type shared by every component of the hook,
// along with a result alias and small constructor helpers for the errors that
// arise when spawning external tools.
//
// KEY COMPONENTS:
// - CoreError: All failure modes of a hook run
// - CoreResult: Result alias used throughout the crate
// - command_start_error / command_failed_error: Helpers for process errors
//
// AI-ASSISTANT-INFO: Error types and helpers for subdump-core

use std::io;
use std::process::ExitStatus;
use thiserror::Error;

/// Errors produced while running the hook.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A required environment variable was unset or empty.
    #[error("environment variable {0} must be set and non-empty")]
    MissingEnv(String),

    /// The episode file named by the environment does not exist.
    #[error("episode file not found: {path}")]
    EpisodeFileNotFound {
        path: String,
        #[source]
        source: Option<io::Error>,
    },

    /// An external executable could not be located on the search path.
    #[error("required tool '{tool}' not found: {source}")]
    DependencyNotFound {
        tool: String,
        #[source]
        source: which::Error,
    },

    /// An external command could not be started.
    #[error("failed to start {0}: {1}")]
    CommandStart(String, #[source] io::Error),

    /// An external command ran but exited unsuccessfully.
    #[error("{command} failed with {status}: {message}")]
    CommandFailed {
        command: String,
        status: ExitStatus,
        message: String,
    },

    /// The prober's output did not have a recognisable stream layout.
    #[error("could not parse ffprobe output: {0}")]
    ProbeParse(String),

    /// A stream selector was not of the form `container:index`.
    #[error("invalid stream id '{0}', expected <container>:<index>")]
    InvalidStreamId(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for subdump operations.
pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// Builds a `CoreError::CommandStart` for a command that failed to spawn.
pub fn command_start_error(command: impl Into<String>, err: io::Error) -> CoreError {
    CoreError::CommandStart(command.into(), err)
}

/// Builds a `CoreError::CommandFailed` for a command with a non-zero exit.
pub fn command_failed_error(
    command: impl Into<String>,
    status: ExitStatus,
    message: impl Into<String>,
) -> CoreError {
    CoreError::CommandFailed {
        command: command.into(),
        status,
        message: message.into(),
    }
}
