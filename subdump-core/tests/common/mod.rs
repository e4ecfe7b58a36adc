// subdump-core/tests/common/mod.rs
//
// Fake ffprobe/ffmpeg executables for integration tests. The scripts record
// their arguments so tests can assert on the exact invocations.

#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

pub const SUBTITLE_JSON: &str = r#"{"streams": [
    {"index": 2, "codec_name": "ass", "codec_type": "subtitle", "tags": {"language": "eng"}},
    {"index": 3, "codec_name": "subrip", "codec_type": "subtitle", "tags": {"language": "spa"}},
    {"index": 4, "codec_name": "subrip", "codec_type": "subtitle", "tags": {"language": "chi"}}
]}"#;

pub const SUBTITLE_BANNER: &str = "Input #0, matroska,webm, from 'episode.mkv':
  Stream #0:0: Video: h264 (High), yuv420p, 1920x1080, 23.98 fps (default)
  Stream #0:1(jpn): Audio: aac (LC), 48000 Hz, stereo, fltp (default)
  Stream #0:2(eng): Subtitle: subrip (default)
  Stream #0:3(zho): Subtitle: ass
";

pub fn write_script(path: &Path, body: &str) {
    fs::write(path, format!("#!/bin/sh\n{}", body)).unwrap();
    let mut perms = fs::metadata(path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms).unwrap();
}

/// Writes a fake ffprobe printing `json` for JSON requests and `banner` on
/// stderr otherwise. Arguments of every call are appended to `<dir>/ffprobe.log`.
pub fn fake_ffprobe(dir: &Path, json: &str, banner: &str) -> PathBuf {
    let path = dir.join("ffprobe");
    let log = dir.join("ffprobe.log");
    write_script(
        &path,
        &format!(
            r#"if [ "$1" = "-version" ]; then echo "ffprobe version 9.9-fake"; exit 0; fi
echo "$@" >> '{log}'
for a in "$@"; do
  if [ "$a" = "json" ]; then
    cat <<'JSON'
{json}
JSON
    exit 0
  fi
done
cat >&2 <<'BANNER'
{banner}
BANNER
"#,
            log = log.display(),
            json = json,
            banner = banner,
        ),
    );
    path
}

/// Writes a fake ffmpeg that writes a small file at its last argument. Calls
/// whose arguments contain `fail_on` exit with status 1 instead.
pub fn fake_ffmpeg(dir: &Path, fail_on: Option<&str>) -> PathBuf {
    let path = dir.join("ffmpeg");
    let log = dir.join("ffmpeg.log");
    let fail_check = match fail_on {
        Some(pattern) => format!(
            r#"for a in "$@"; do
  if [ "$a" = "{pattern}" ]; then echo "Error while opening encoder" >&2; exit 1; fi
done
"#
        ),
        None => String::new(),
    };
    write_script(
        &path,
        &format!(
            r#"if [ "$1" = "-version" ]; then echo "ffmpeg version 9.9-fake"; exit 0; fi
echo "$@" >> '{log}'
{fail_check}for last in "$@"; do :; done
echo "[Script Info]" > "$last"
"#,
            log = log.display(),
            fail_check = fail_check,
        ),
    );
    path
}

/// Lines of a fake tool's argument log, one per invocation.
pub fn recorded_calls(dir: &Path, tool: &str) -> Vec<String> {
    fs::read_to_string(dir.join(format!("{}.log", tool)))
        .map(|s| s.lines().map(ToString::to_string).collect())
        .unwrap_or_default()
}
