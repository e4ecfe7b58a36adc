// ============================================================================
// subdump-core/src/extract.rs
// ============================================================================
//
// STREAM EXTRACTOR: Dump One Subtitle Stream to a Sidecar File
//
// Each kept stream is written next to the episode as
// `<stem>.<container_index>.<language>.<format>`, for example
// `Show.S01E01.0_2.eng.ass`. ffmpeg re-opens the source for every stream and
// converts the track into the configured output format, or copies it when
// converts the track into the configured output format, whatever the
// source codec is.
//
// AI-ASSISTANT-INFO: Sidecar naming and ffmpeg subtitle extraction

use crate::error::CoreResult;
use crate::external::ffmpeg_executor::run_ffmpeg;
use crate::external::{FfmpegSpawner, ToolHandle};
use crate::media::SubtitleStream;
use ffmpeg_sidecar::command::FfmpegCommand;
use std::path::{Path, PathBuf};

/// Returns the sidecar path for `stream` in the given output format.
///
/// The source's final extension is replaced by
/// `.<stream id with ':' as '_'>.<language>.<format>`.
pub fn sidecar_path(stream: &SubtitleStream, format: &str) -> PathBuf {
    let mut path = stream.source_file.with_extension("").into_os_string();
    path.push(format!(
        ".{}.{}.{}",
        stream.stream_id.file_token(),
        stream.language,
        format
    ));
    PathBuf::from(path)
}

/// Builds the ffmpeg command converting exactly `stream` into `output`.
///
/// Paths are passed as OS strings so non-UTF-8 file names reach ffmpeg
/// unchanged.
pub fn build_extract_command(
    ffmpeg: &ToolHandle,
    stream: &SubtitleStream,
    output: &Path,
    format: &str,
) -> FfmpegCommand {
    let mut cmd = FfmpegCommand::new_with_path(&ffmpeg.path);
    cmd.overwrite();
    cmd.arg("-i");
    cmd.arg(&stream.source_file);
    cmd.arg("-map");
    cmd.arg(stream.stream_id.as_str());
    cmd.arg("-c:s");
    cmd.arg(format);
    cmd.arg(output);
    cmd
}

/// Extracts `stream` into its sidecar file and returns the sidecar path.
///
/// A failed extraction is returned to the caller; any partially written
/// output is left in place.
pub fn extract_stream<S: FfmpegSpawner>(
    spawner: &S,
    ffmpeg: &ToolHandle,
    stream: &SubtitleStream,
    format: &str,
) -> CoreResult<PathBuf> {
    let output = sidecar_path(stream, format);
    log::info!(
        "Dumping subtitle stream: id={} language={} from={} to={} output={}",
        stream.stream_id,
        stream.language,
        stream.format,
        format,
        output.display()
    );

    let cmd = build_extract_command(ffmpeg, stream, &output, format);
    run_ffmpeg(spawner, cmd, &format!("extract {}", stream.stream_id))?;

    log::info!("Dumped subtitle file: {}", output.display());
    Ok(output)
}
