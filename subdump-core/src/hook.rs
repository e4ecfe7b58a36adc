// ============================================================================
// subdump-core/src/hook.rs
// ============================================================================
//
// HOOK ORCHESTRATION: One Straight-Line Run of the Subtitle Dumper
//
// gate -> tool locator -> stream inspector -> language filter -> extractor
//
// Failures before extraction abort the run, including an episode without any
// subtitle stream. Extraction failures are recorded
// per stream and the remaining streams are still attempted; the resulting
// RunSummary decides the exit code.
//
// AI-ASSISTANT-INFO: Top-level hook pipeline

use crate::config::CoreConfig;
use crate::error::CoreResult;
use crate::external::{
    CommandFfprobeExecutor, FfmpegSpawner, FfprobeExecutor, SidecarSpawner, ToolHandle,
    locate_toolchain,
};
use crate::extract::extract_stream;
use crate::filter::LanguageFilter;
use crate::gate::{GateDecision, HookEnvironment, evaluate_event_type, validate_episode_file};
use crate::media::inspect_streams;
use crate::reporting::summary::{EXIT_FAILURE, EXIT_SUCCESS};
use crate::reporting::{ExtractionOutcome, RunSummary};
use std::path::Path;

/// How a hook run ended, short of a fatal error.
#[derive(Debug)]
pub enum HookOutcome {
    /// Sonarr's connection test; nothing was done.
    SelfTest,
    /// An event type this hook does not handle; nothing was done.
    Unsupported(String),
    /// Streams were filtered and extracted.
    Completed(RunSummary),
}

impl HookOutcome {
    /// Process exit code for this outcome.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::SelfTest => EXIT_SUCCESS,
            Self::Unsupported(_) => EXIT_FAILURE,
            Self::Completed(summary) => summary.exit_code(),
        }
    }
}

/// Runs the hook for the given Sonarr environment.
pub fn run_hook(config: &CoreConfig, env: &HookEnvironment) -> CoreResult<HookOutcome> {
    match evaluate_event_type(env.event_type.as_deref())? {
        GateDecision::SelfTest => {
            log::info!("Test event, exiting");
            return Ok(HookOutcome::SelfTest);
        }
        GateDecision::Unsupported(event_type) => {
            log::info!("Only download events are supported: eventtype={}", event_type);
            return Ok(HookOutcome::Unsupported(event_type));
        }
        GateDecision::Proceed => {}
    }

    if let Some(is_upgrade) = env.is_upgrade.as_deref() {
        log::info!("Download event: isupgrade={}", is_upgrade);
    }
    let episode = validate_episode_file(env.episode_file.as_deref())?;

    let tools = locate_toolchain(config)?;
    let executor = CommandFfprobeExecutor::new(tools.ffprobe.clone());

    dump_subtitles(config, &episode, &executor, &SidecarSpawner, &tools.ffmpeg)
}

/// Inspects `episode`, then extracts every allow-listed subtitle stream.
pub fn dump_subtitles<E, S>(
    config: &CoreConfig,
    episode: &Path,
    executor: &E,
    spawner: &S,
    ffmpeg: &ToolHandle,
) -> CoreResult<HookOutcome>
where
    E: FfprobeExecutor,
    S: FfmpegSpawner,
{
    let streams = inspect_streams(executor, episode)?;

    let filter = LanguageFilter::new(config.languages.iter().cloned());
    let mut summary = RunSummary::new();

    for stream in streams {
        log::info!(
            "Got subtitle stream: id={} language={} format={}",
            stream.stream_id,
            stream.language,
            stream.format
        );
        if !filter.accepts(&stream) {
            log::debug!("Skipping subtitle stream: id={} language={}", stream.stream_id, stream.language);
            summary.record_skipped(stream);
            continue;
        }

        let outcome = match extract_stream(spawner, ffmpeg, &stream, &config.subtitle_format) {
            Ok(output) => ExtractionOutcome::Extracted { stream, output },
            Err(error) => {
                log::error!("Failed to dump subtitle stream: id={} error={}", stream.stream_id, error);
                ExtractionOutcome::Failed { stream, error }
            }
        };
        summary.record(outcome);
    }

    if summary.has_failures() {
        log::warn!("Dumped subtitles with failures: {}", summary);
    } else {
        log::info!("Dumped all subtitles: {}", summary);
    }
    Ok(HookOutcome::Completed(summary))
}
