// subdump-cli/src/main.rs
//
// Entry point for the Subdump hook binary. Sonarr runs it as a Custom Script
// with its inputs in `sonarr_*` environment variables.
//
// Responsibilities:
// - Parsing flags and environment with clap.
// - Setting up logging on stderr.
// - Running the hook command and mapping its result to an exit code.

use clap::Parser;
use std::process::ExitCode;
use subdump_cli::logging::init_logging;
use subdump_cli::{Cli, report_fatal, run_hook_command};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let code = match run_hook_command(&cli) {
        Ok(code) => code,
        Err(e) => report_fatal(&e),
    };
    ExitCode::from(code)
}
