// ============================================================================
// subdump-core/src/media/probe.rs
// ============================================================================
//
// STREAM INSPECTOR: Discover Subtitle Streams with FFprobe
//
// The inspector asks ffprobe for a JSON listing of the file's subtitle
// streams. If that output cannot be deserialized it falls back to the
// human-readable `ffprobe -i` banner and extracts streams with a regular
// expression over lines such as:
//
//     Stream #0:2(eng): Subtitle: ass (default)
//
// Finding no subtitle stream at all, in either mode, is a parse error: the
// run aborts instead of exiting cleanly.
//
// AI-ASSISTANT-INFO: ffprobe-based subtitle stream discovery

use crate::error::{CoreError, CoreResult};
use crate::external::FfprobeExecutor;
use crate::media::stream::{StreamId, SubtitleStream};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Matches a stream selector, then a parenthesized language tag, then the
/// subtitle marker followed by the codec name, all on one line.
static SUBTITLE_STREAM_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Stream #(\d+:\d+).*?\((\w+)\).*?Subtitle: (\w+)")
        .expect("subtitle stream regex is valid")
});

/// Language recorded for streams ffprobe reports without a language tag.
pub const UNDETERMINED_LANGUAGE: &str = "und";

// ---- ffprobe JSON structures ----

#[derive(Debug, Deserialize)]
struct ProbeOutput {
    #[serde(default)]
    streams: Vec<ProbeStream>,
}

#[derive(Debug, Deserialize)]
struct ProbeStream {
    index: u32,
    #[serde(default)]
    codec_type: Option<String>,
    #[serde(default)]
    codec_name: Option<String>,
    #[serde(default)]
    tags: HashMap<String, String>,
}

/// Lists the subtitle streams of `input_path`, in ffprobe's stream order.
pub fn inspect_streams<E: FfprobeExecutor>(
    executor: &E,
    input_path: &Path,
) -> CoreResult<Vec<SubtitleStream>> {
    let json = executor.probe_json(input_path)?;
    match parse_json_output(input_path, &json) {
        Ok(streams) => {
            log::debug!("Parsed {} subtitle stream(s) from ffprobe JSON", streams.len());
            Ok(streams)
        }
        Err(CoreError::Json(e)) => {
            log::warn!("ffprobe JSON output unusable ({}), falling back to text output", e);
            let text = executor.probe_text(input_path)?;
            parse_text_output(input_path, &text)
        }
        Err(e) => Err(e),
    }
}

/// Maps ffprobe's `-print_format json -show_streams` output to subtitle streams.
///
/// Non-subtitle streams are ignored. Streams without a language tag get
/// [`UNDETERMINED_LANGUAGE`]. A listing without subtitle streams is rejected
/// with `CoreError::ProbeParse`.
pub fn parse_json_output(source: &Path, json: &str) -> CoreResult<Vec<SubtitleStream>> {
    let output: ProbeOutput = serde_json::from_str(json)?;

    let streams: Vec<SubtitleStream> = output
        .streams
        .into_iter()
        .filter(|s| s.codec_type.as_deref() == Some("subtitle"))
        .map(|mut s| SubtitleStream {
            source_file: source.to_path_buf(),
            stream_id: StreamId::from_index(s.index),
            language: s
                .tags
                .remove("language")
                .filter(|lang| !lang.is_empty())
                .unwrap_or_else(|| UNDETERMINED_LANGUAGE.to_string()),
            format: s.codec_name.unwrap_or_else(|| "unknown".to_string()),
        })
        .collect();
    require_streams(streams)
}

/// Extracts subtitle streams from ffprobe's human-readable output.
///
/// Produces one stream per matching line, in input order. Output without
/// a single matching line is rejected with `CoreError::ProbeParse`.
pub fn parse_text_output(source: &Path, output: &str) -> CoreResult<Vec<SubtitleStream>> {
    let streams = SUBTITLE_STREAM_RE
        .captures_iter(output)
        .map(|caps| {
            Ok(SubtitleStream {
                source_file: source.to_path_buf(),
                stream_id: StreamId::parse(&caps[1])?,
                language: caps[2].to_string(),
                format: caps[3].to_string(),
            })
        })
        .collect::<CoreResult<Vec<_>>>()?;
    require_streams(streams)
}

fn require_streams(streams: Vec<SubtitleStream>) -> CoreResult<Vec<SubtitleStream>> {
    if streams.is_empty() {
        return Err(CoreError::ProbeParse("no subtitle streams found".to_string()));
    }
    Ok(streams)
}
