//! End-to-end tests driving the `subdump` binary the way Sonarr does:
//! inputs in `sonarr_*` environment variables, outcome in the exit code.

#![cfg(unix)]

use assert_cmd::Command;
use predicates::str::contains;
use std::error::Error;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

const SONARR_VARS: [&str; 3] = [
    "sonarr_eventtype",
    "sonarr_episodefile_path",
    "sonarr_isupgrade",
];

const STREAMS_JSON: &str = r#"{"streams": [
    {"index": 2, "codec_name": "subrip", "codec_type": "subtitle", "tags": {"language": "eng"}},
    {"index": 3, "codec_name": "ass", "codec_type": "subtitle", "tags": {"language": "jpn"}},
    {"index": 5, "codec_name": "ass", "codec_type": "subtitle", "tags": {"language": "zho"}}
]}"#;

// Helper function to get the compiled binary with a clean Sonarr environment
fn subdump_cmd() -> Command {
    let mut cmd = Command::cargo_bin("subdump").expect("Failed to find subdump binary");
    for var in SONARR_VARS {
        cmd.env_remove(var);
    }
    cmd.env_remove("SUBDUMP_LANGUAGES").env_remove("SUBDUMP_FORMAT");
    cmd
}

fn write_script(path: &Path, body: &str) -> Result<(), Box<dyn Error>> {
    fs::write(path, format!("#!/bin/sh\n{}", body))?;
    fs::set_permissions(path, fs::Permissions::from_mode(0o755))?;
    Ok(())
}

/// Fake tools: ffprobe answers with `STREAMS_JSON`, ffmpeg writes a stub
/// file at its last argument. Both log their calls next to themselves.
fn fake_tools(dir: &Path) -> Result<(PathBuf, PathBuf), Box<dyn Error>> {
    let ffprobe = dir.join("ffprobe");
    let ffmpeg = dir.join("ffmpeg");
    write_script(
        &ffprobe,
        &format!(
            "if [ \"$1\" = \"-version\" ]; then echo \"ffprobe version fake\"; exit 0; fi\n\
             echo \"$@\" >> '{log}'\n\
             cat <<'JSON'\n{json}\nJSON\n",
            log = dir.join("ffprobe.log").display(),
            json = STREAMS_JSON,
        ),
    )?;
    write_script(
        &ffmpeg,
        &format!(
            "if [ \"$1\" = \"-version\" ]; then echo \"ffmpeg version fake\"; exit 0; fi\n\
             echo \"$@\" >> '{log}'\n\
             for last in \"$@\"; do :; done\n\
             echo \"[Script Info]\" > \"$last\"\n",
            log = dir.join("ffmpeg.log").display(),
        ),
    )?;
    Ok((ffprobe, ffmpeg))
}

fn sidecars(dir: &Path) -> Result<Vec<String>, Box<dyn Error>> {
    let mut names: Vec<String> = fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .filter(|n| n.ends_with(".ass") || n.ends_with(".srt"))
        .collect();
    names.sort();
    Ok(names)
}

#[test]
fn test_sonarr_test_event_succeeds_without_side_effects() -> Result<(), Box<dyn Error>> {
    let tools = tempdir()?;
    let (ffprobe, ffmpeg) = fake_tools(tools.path())?;

    subdump_cmd()
        .env("sonarr_eventtype", "Test")
        .env("SUBDUMP_FFPROBE", &ffprobe)
        .env("SUBDUMP_FFMPEG", &ffmpeg)
        .assert()
        .success()
        .stderr(contains("Test event, exiting"));

    assert!(!tools.path().join("ffprobe.log").exists());
    assert!(!tools.path().join("ffmpeg.log").exists());
    Ok(())
}

#[test]
fn test_test_event_does_not_need_tools() {
    subdump_cmd()
        .env("sonarr_eventtype", "Test")
        .env("SUBDUMP_FFPROBE", "/surely/not/here/ffprobe")
        .assert()
        .success();
}

#[test]
fn test_test_event_ignores_empty_episode_path() {
    subdump_cmd()
        .env("sonarr_eventtype", "Test")
        .env("sonarr_episodefile_path", "")
        .assert()
        .success()
        .stderr(contains("Test event, exiting"));
}

#[test]
fn test_download_with_empty_episode_path_exits_one() {
    subdump_cmd()
        .env("sonarr_eventtype", "Download")
        .env("sonarr_episodefile_path", "")
        .assert()
        .code(1)
        .stderr(contains("sonarr_episodefile_path"));
}

#[test]
fn test_unsupported_event_exits_one() -> Result<(), Box<dyn Error>> {
    let library = tempdir()?;
    let episode = library.path().join("Show.S01E01.mkv");
    fs::write(&episode, "dummy content")?;

    subdump_cmd()
        .env("sonarr_eventtype", "Rename")
        .env("sonarr_episodefile_path", &episode)
        .assert()
        .code(1)
        .stderr(contains("eventtype=Rename"));

    assert!(sidecars(library.path())?.is_empty());
    Ok(())
}

#[test]
fn test_missing_event_type_exits_one() {
    subdump_cmd()
        .assert()
        .code(1)
        .stderr(contains("sonarr_eventtype"));
}

#[test]
fn test_download_with_missing_episode_exits_one() {
    subdump_cmd()
        .env("sonarr_eventtype", "Download")
        .env("sonarr_episodefile_path", "/surely/not/here/Show.S01E01.mkv")
        .assert()
        .code(1);
}

#[test]
fn test_download_with_missing_tool_exits_one() -> Result<(), Box<dyn Error>> {
    let library = tempdir()?;
    let episode = library.path().join("Show.S01E01.mkv");
    fs::write(&episode, "dummy content")?;

    subdump_cmd()
        .env("sonarr_eventtype", "Download")
        .env("sonarr_episodefile_path", &episode)
        .env("SUBDUMP_FFPROBE", "/surely/not/here/ffprobe")
        .assert()
        .code(1)
        .stderr(contains("ffprobe"));

    assert!(sidecars(library.path())?.is_empty());
    Ok(())
}

#[test]
fn test_download_dumps_allow_listed_subtitles() -> Result<(), Box<dyn Error>> {
    let tools = tempdir()?;
    let (ffprobe, ffmpeg) = fake_tools(tools.path())?;
    let library = tempdir()?;
    let episode = library.path().join("Show.S01E01.mkv");
    fs::write(&episode, "dummy content")?;

    subdump_cmd()
        .env("sonarr_eventtype", "Download")
        .env("sonarr_episodefile_path", &episode)
        .env("sonarr_isupgrade", "False")
        .env("SUBDUMP_FFPROBE", &ffprobe)
        .env("SUBDUMP_FFMPEG", &ffmpeg)
        .assert()
        .success()
        .stderr(contains("isupgrade=False"));

    assert_eq!(
        sidecars(library.path())?,
        vec![
            "Show.S01E01.0_2.eng.ass".to_string(),
            "Show.S01E01.0_5.zho.ass".to_string(),
        ]
    );
    let calls = fs::read_to_string(tools.path().join("ffmpeg.log"))?;
    assert_eq!(calls.lines().count(), 2);
    Ok(())
}

#[test]
fn test_language_and_format_come_from_environment() -> Result<(), Box<dyn Error>> {
    let tools = tempdir()?;
    let (ffprobe, ffmpeg) = fake_tools(tools.path())?;
    let library = tempdir()?;
    let episode = library.path().join("Show.S01E01.mkv");
    fs::write(&episode, "dummy content")?;

    subdump_cmd()
        .env("sonarr_eventtype", "Download")
        .env("sonarr_episodefile_path", &episode)
        .env("SUBDUMP_LANGUAGES", "jpn")
        .env("SUBDUMP_FORMAT", "srt")
        .env("SUBDUMP_FFPROBE", &ffprobe)
        .env("SUBDUMP_FFMPEG", &ffmpeg)
        .assert()
        .success();

    assert_eq!(sidecars(library.path())?, vec!["Show.S01E01.0_3.jpn.srt".to_string()]);
    Ok(())
}

#[test]
fn test_flags_stand_in_for_environment() -> Result<(), Box<dyn Error>> {
    subdump_cmd()
        .args(["--event-type", "Test", "--verbose"])
        .assert()
        .success();
    Ok(())
}
