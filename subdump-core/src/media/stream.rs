//! Subtitle stream descriptors.

use crate::error::{CoreError, CoreResult};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// An ffmpeg stream selector in `container:index` form, such as `0:2`.
///
/// The value is validated on construction and later used verbatim as the
/// `-map` argument of the transcoder.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StreamId(String);

impl StreamId {
    /// Validates and wraps a selector string.
    pub fn parse(value: &str) -> CoreResult<Self> {
        let is_number = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
        match value.split_once(':') {
            Some((container, index)) if is_number(container) && is_number(index) => {
                Ok(Self(value.to_string()))
            }
            _ => Err(CoreError::InvalidStreamId(value.to_string())),
        }
    }

    /// Builds the selector for stream `index` of the first input container.
    pub fn from_index(index: u32) -> Self {
        Self(format!("0:{}", index))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The selector with `:` replaced by `_`, safe to embed in a file name.
    pub fn file_token(&self) -> String {
        self.0.replace(':', "_")
    }
}

impl FromStr for StreamId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for StreamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One subtitle track found inside a media file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtitleStream {
    /// The media file the stream lives in
    pub source_file: PathBuf,
    /// Selector of the stream within the file
    pub stream_id: StreamId,
    /// Language tag as reported by ffprobe (e.g. "eng", "chi")
    pub language: String,
    /// Codec name as reported by ffprobe (e.g. "subrip", "ass")
    pub format: String,
}
