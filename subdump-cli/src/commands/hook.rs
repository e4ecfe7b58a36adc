// ============================================================================
// subdump-cli/src/commands/hook.rs
// ============================================================================
//
// HOOK COMMAND: Run the Subtitle Dumper for One Sonarr Event
//
// Loads configuration from the environment, hands the Sonarr inputs to the
// core library, and turns the outcome into a process exit code.
//
// AI-ASSISTANT-INFO: Hook command entry point

use crate::cli::Cli;
use crate::error::CliResult;
use anyhow::Context;
use subdump_core::{CoreConfig, HookOutcome, run_hook};

/// Runs the hook and returns the process exit code.
pub fn run_hook_command(cli: &Cli) -> CliResult<u8> {
    let config = CoreConfig::from_env();
    log::debug!(
        "Configuration: languages={} format={} ffprobe={} ffmpeg={}",
        config.languages.join(","),
        config.subtitle_format,
        config.ffprobe_name,
        config.ffmpeg_name
    );

    run_with_config(cli, &config)
}

/// Runs the hook against an explicit configuration.
pub fn run_with_config(cli: &Cli, config: &CoreConfig) -> CliResult<u8> {
    let env = cli.hook_environment();
    let outcome = run_hook(config, &env).context("Failed to dump subtitles")?;

    if let HookOutcome::Completed(summary) = &outcome {
        for path in summary.extracted() {
            log::debug!("Wrote {}", path.display());
        }
    }
    Ok(outcome.exit_code())
}
