// ============================================================================
// subdump-cli/src/logging.rs
// ============================================================================
//
// LOGGING SETUP: Console Logging for the Hook
//
// The hook logs through the standard `log` crate with `env_logger` as the
// backend. Sonarr captures the script's stderr into its own log, so every
// line carries a timestamp and level.
//
// USAGE:
// - RUST_LOG=info (default): Decision points and written files
// - RUST_LOG=debug (or --verbose): Commands being run, skipped streams
// - RUST_LOG=trace: Every ffmpeg log line
//
// AI-ASSISTANT-INFO: Logger initialization for the hook binary

use log::LevelFilter;
use std::io::Write;

/// Returns the current local timestamp formatted for log lines.
pub fn get_timestamp() -> String {
    chrono::Local::now()
        .format("%Y-%m-%dT%H:%M:%S%.3f")
        .to_string()
}

/// Formats one log line.
pub fn format_line(timestamp: &str, level: log::Level, message: &str) -> String {
    format!("{} {:<5} {}", timestamp, level, message)
}

/// Initializes env_logger on stderr.
///
/// `verbose` raises the default level from info to debug; an explicit
/// `RUST_LOG` overrides either.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_env("RUST_LOG")
        .target(env_logger::Target::Stderr)
        .format(|buf, record| {
            writeln!(
                buf,
                "{}",
                format_line(&get_timestamp(), record.level(), &record.args().to_string())
            )
        })
        .init();
}
