// subdump-cli/src/lib.rs
//
// Library portion of the Subdump CLI application.
// Contains argument definitions and command logic.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;

// Re-export items needed by the binary or integration tests
pub use cli::Cli;
pub use commands::hook::run_hook_command;
pub use error::{CliResult, report_fatal};
