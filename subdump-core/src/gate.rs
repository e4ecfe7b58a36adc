// ============================================================================
// subdump-core/src/gate.rs
// ============================================================================
//
// ENVIRONMENT GATE: Decide Whether a Hook Invocation Has Work To Do
//
// Sonarr passes everything a Custom Script needs through environment
// variables. This module captures those variables and turns the event type
// into a decision: a connection test, an event we do not handle, or a
// download that should be processed. It also validates the episode path.
//
// AI-ASSISTANT-INFO: Sonarr environment parsing and event gating

use crate::error::{CoreError, CoreResult};
use std::path::{Path, PathBuf};

/// Variable holding the Sonarr event type.
pub const ENV_EVENT_TYPE: &str = "sonarr_eventtype";

/// Variable holding the full path of the imported episode file.
pub const ENV_EPISODE_FILE: &str = "sonarr_episodefile_path";

/// Variable set to `True` when an existing file was upgraded.
pub const ENV_IS_UPGRADE: &str = "sonarr_isupgrade";

/// Event type Sonarr sends when the user presses "Test" on the connection.
pub const EVENT_TEST: &str = "Test";

/// Event type Sonarr sends after an episode file has been imported.
pub const EVENT_DOWNLOAD: &str = "Download";

/// The Sonarr-provided inputs of one hook invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HookEnvironment {
    pub event_type: Option<String>,
    pub episode_file: Option<PathBuf>,
    pub is_upgrade: Option<String>,
}

/// Outcome of inspecting the event type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    /// Connection test from Sonarr; succeed without doing anything.
    SelfTest,
    /// An event this hook does not handle.
    Unsupported(String),
    /// A completed download; continue with the episode file.
    Proceed,
}

/// Maps the raw event type onto a [`GateDecision`].
///
/// Matching is exact and case-sensitive. A missing or empty value is an error.
pub fn evaluate_event_type(event_type: Option<&str>) -> CoreResult<GateDecision> {
    let event_type = match event_type {
        Some(value) if !value.is_empty() => value,
        _ => return Err(CoreError::MissingEnv(ENV_EVENT_TYPE.to_string())),
    };
    log::info!("Got event type: eventtype={}", event_type);

    Ok(match event_type {
        EVENT_TEST => GateDecision::SelfTest,
        EVENT_DOWNLOAD => GateDecision::Proceed,
        other => GateDecision::Unsupported(other.to_string()),
    })
}

/// Checks that the episode path is set and names an existing file.
pub fn validate_episode_file(path: Option<&Path>) -> CoreResult<PathBuf> {
    let path = match path {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => return Err(CoreError::MissingEnv(ENV_EPISODE_FILE.to_string())),
    };
    log::info!("Got episode file: episodefile={}", path.display());

    match std::fs::metadata(path) {
        Ok(meta) if meta.is_file() => Ok(path.to_path_buf()),
        Ok(_) => Err(CoreError::EpisodeFileNotFound {
            path: path.display().to_string(),
            source: None,
        }),
        Err(e) => Err(CoreError::EpisodeFileNotFound {
            path: path.display().to_string(),
            source: Some(e),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_or_empty_event_type_is_error() {
        assert!(matches!(
            evaluate_event_type(None),
            Err(CoreError::MissingEnv(ref name)) if name == ENV_EVENT_TYPE
        ));
        assert!(matches!(
            evaluate_event_type(Some("")),
            Err(CoreError::MissingEnv(_))
        ));
    }

    #[test]
    fn test_event_type_decisions() {
        assert_eq!(evaluate_event_type(Some("Test")).unwrap(), GateDecision::SelfTest);
        assert_eq!(evaluate_event_type(Some("Download")).unwrap(), GateDecision::Proceed);
        assert_eq!(
            evaluate_event_type(Some("Rename")).unwrap(),
            GateDecision::Unsupported("Rename".to_string())
        );
    }

    #[test]
    fn test_event_type_is_case_sensitive() {
        assert_eq!(
            evaluate_event_type(Some("download")).unwrap(),
            GateDecision::Unsupported("download".to_string())
        );
        assert_eq!(
            evaluate_event_type(Some("TEST")).unwrap(),
            GateDecision::Unsupported("TEST".to_string())
        );
    }

    #[test]
    fn test_episode_file_validation() {
        let dir = tempdir().unwrap();
        let episode = dir.path().join("Show.S01E01.mkv");
        std::fs::write(&episode, b"not really a video").unwrap();

        assert_eq!(validate_episode_file(Some(&episode)).unwrap(), episode);

        assert!(matches!(
            validate_episode_file(None),
            Err(CoreError::MissingEnv(ref name)) if name == ENV_EPISODE_FILE
        ));
        assert!(matches!(
            validate_episode_file(Some(Path::new(""))),
            Err(CoreError::MissingEnv(_))
        ));
        assert!(matches!(
            validate_episode_file(Some(&dir.path().join("missing.mkv"))),
            Err(CoreError::EpisodeFileNotFound { source: Some(_), .. })
        ));
        assert!(matches!(
            validate_episode_file(Some(dir.path())),
            Err(CoreError::EpisodeFileNotFound { source: None, .. })
        ));
    }
}
