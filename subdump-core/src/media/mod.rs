//! Subtitle stream model and probing module
//!
//! This module provides the data structures describing the subtitle tracks
//! embedded in an episode file, and the stream inspector that discovers them
//! using FFprobe.

pub mod probe;
pub mod stream;

// Re-export commonly used types
pub use probe::{inspect_streams, parse_json_output, parse_text_output};
pub use stream::{StreamId, SubtitleStream};
