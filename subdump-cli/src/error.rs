// ============================================================================
// subdump-cli/src/error.rs
// ============================================================================
//
// CLI ERROR HANDLING: Result type and fatal error reporting for the binary
//
// Core failures arrive as `CoreError` and are wrapped in `anyhow::Error`
// with context at the command boundary. Every fatal error ends the hook with
// exit code 1 after being logged once.
//
// AI-ASSISTANT-INFO: CLI error handling utilities

use subdump_core::reporting::summary::EXIT_FAILURE;

/// Result type for CLI operations.
pub type CliResult<T> = anyhow::Result<T>;

/// Renders an error and its causes on a single line.
pub fn describe_error(error: &anyhow::Error) -> String {
    error
        .chain()
        .map(|cause| cause.to_string())
        .collect::<Vec<_>>()
        .join(": ")
}

/// Logs a fatal error and returns the exit code for it.
pub fn report_fatal(error: &anyhow::Error) -> u8 {
    log::error!("Subtitle dump aborted: {}", describe_error(error));
    EXIT_FAILURE
}
