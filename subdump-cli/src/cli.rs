// subdump-cli/src/cli.rs
//
// Defines the command-line argument structure using clap. Sonarr passes its
// inputs through environment variables; each one is also accepted as a long
// flag so the hook can be run by hand.

use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;
use subdump_core::HookEnvironment;
use subdump_core::gate::{ENV_EPISODE_FILE, ENV_EVENT_TYPE, ENV_IS_UPGRADE};

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "Subdump: Sonarr subtitle dumper",
    long_about = "Sonarr Custom Script that extracts allow-listed embedded subtitle \
                  streams of a downloaded episode into sidecar files using ffprobe and ffmpeg."
)]
pub struct Cli {
    /// Sonarr event type (Test, Download, ...)
    #[arg(long = "event-type", value_name = "EVENT", env = ENV_EVENT_TYPE)]
    pub event_type: Option<String>,

    /// Full path to the imported episode file
    // Kept as a raw OS string: an empty value must reach the hook, which
    // ignores it for `Test` and rejects it for `Download`.
    #[arg(long = "episode-file", value_name = "PATH", env = ENV_EPISODE_FILE)]
    pub episode_file: Option<OsString>,

    /// `True` when an existing file was upgraded, `False` otherwise
    #[arg(long = "is-upgrade", value_name = "BOOL", env = ENV_IS_UPGRADE, hide = true)]
    pub is_upgrade: Option<String>,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Cli {
    /// The Sonarr inputs as the core library expects them.
    pub fn hook_environment(&self) -> HookEnvironment {
        HookEnvironment {
            event_type: self.event_type.clone(),
            episode_file: self.episode_file.clone().map(PathBuf::from),
            is_upgrade: self.is_upgrade.clone(),
        }
    }
}
