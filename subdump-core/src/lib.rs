//! Core library for the Subdump Sonarr hook.
//!
//! After Sonarr imports an episode, the hook lists the file's embedded
//! subtitle streams with ffprobe, keeps those in allow-listed languages, and
//! dumps each one into a sidecar file next to the episode with ffmpeg.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//! use subdump_core::{CoreConfig, HookEnvironment, run_hook};
//!
//! let config = CoreConfig::from_env();
//! let env = HookEnvironment {
//!     event_type: Some("Download".to_string()),
//!     episode_file: Some(PathBuf::from("/tv/Show/Show.S01E01.mkv")),
//!     is_upgrade: None,
//! };
//!
//! let outcome = run_hook(&config, &env).unwrap();
//! std::process::exit(outcome.exit_code() as i32);
//! ```

pub mod config;
pub mod error;
pub mod external;
pub mod extract;
pub mod filter;
pub mod gate;
pub mod hook;
pub mod media;
pub mod reporting;

// Re-exports for public API
pub use config::CoreConfig;
pub use error::{CoreError, CoreResult};
pub use external::{ToolHandle, Toolchain, locate_tool, locate_toolchain};
pub use extract::{extract_stream, sidecar_path};
pub use filter::LanguageFilter;
pub use gate::{GateDecision, HookEnvironment};
pub use hook::{HookOutcome, dump_subtitles, run_hook};
pub use media::{StreamId, SubtitleStream};
pub use reporting::{ExtractionOutcome, RunSummary};
