//! Configuration structures and constants for the subdump-core library.
//!
//! This module provides the configuration that shapes a hook run: which
//! subtitle languages are dumped, which output format the sidecars use, and
//! which executables act as prober and transcoder. Values come from the
//! defaults below and may be overridden through `SUBDUMP_*` environment
//! variables.

mod builder;
pub mod utils;

pub use builder::CoreConfigBuilder;

use utils::{get_env_list, get_env_string};

// Default constants

/// Language codes dumped when no override is configured. Entries are compared
/// exactly, so both the two- and three-letter forms are listed.
pub const DEFAULT_LANGUAGES: &[&str] = &["chi", "en", "eng", "zh", "zho"];

/// Output subtitle format. ffmpeg converts every text subtitle into ASS.
pub const DEFAULT_SUBTITLE_FORMAT: &str = "ass";

/// Executable name of the prober.
pub const DEFAULT_FFPROBE: &str = "ffprobe";

/// Executable name of the transcoder.
pub const DEFAULT_FFMPEG: &str = "ffmpeg";

// Environment variable names

/// Comma-separated override of the language allow-list.
pub const ENV_LANGUAGES: &str = "SUBDUMP_LANGUAGES";

/// Override of the output subtitle format.
pub const ENV_SUBTITLE_FORMAT: &str = "SUBDUMP_FORMAT";

/// Override of the prober executable name.
pub const ENV_FFPROBE: &str = "SUBDUMP_FFPROBE";

/// Override of the transcoder executable name.
pub const ENV_FFMPEG: &str = "SUBDUMP_FFMPEG";

/// Main configuration structure for the subdump-core library.
///
/// Created by the consumer of the library (the hook binary) and passed to
/// [`crate::run_hook`].
///
/// # Examples
///
/// ```rust
/// use subdump_core::config::CoreConfigBuilder;
///
/// let config = CoreConfigBuilder::new()
///     .languages(["eng", "jpn"])
///     .subtitle_format("srt")
///     .build();
///
/// assert_eq!(config.subtitle_format, "srt");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    /// Language codes whose streams are dumped (exact, case-sensitive match)
    pub languages: Vec<String>,

    /// Format name passed to ffmpeg and used as the sidecar extension
    pub subtitle_format: String,

    /// Name or path of the prober executable, resolved on `PATH`
    pub ffprobe_name: String,

    /// Name or path of the transcoder executable, resolved on `PATH`
    pub ffmpeg_name: String,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            languages: DEFAULT_LANGUAGES.iter().map(|s| s.to_string()).collect(),
            subtitle_format: DEFAULT_SUBTITLE_FORMAT.to_string(),
            ffprobe_name: DEFAULT_FFPROBE.to_string(),
            ffmpeg_name: DEFAULT_FFMPEG.to_string(),
        }
    }
}

impl CoreConfig {
    /// Builds a configuration from the defaults and any `SUBDUMP_*` overrides
    /// present in the process environment.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            languages: get_env_list(ENV_LANGUAGES, defaults.languages),
            subtitle_format: get_env_string(ENV_SUBTITLE_FORMAT, defaults.subtitle_format),
            ffprobe_name: get_env_string(ENV_FFPROBE, defaults.ffprobe_name),
            ffmpeg_name: get_env_string(ENV_FFMPEG, defaults.ffmpeg_name),
        }
    }
}
