//! Language allow-list for subtitle streams.

use crate::media::SubtitleStream;
use std::collections::HashSet;

/// Keeps streams whose language tag is on the allow-list.
///
/// Matching is exact and case-sensitive: `en` and `eng` are distinct entries,
/// and no prefix matching or normalisation takes place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageFilter {
    allowed: HashSet<String>,
}

impl LanguageFilter {
    pub fn new<I, S>(languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed: languages.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns true if `language` is allow-listed.
    pub fn allows(&self, language: &str) -> bool {
        self.allowed.contains(language)
    }

    /// Returns true if the stream's language is allow-listed.
    pub fn accepts(&self, stream: &SubtitleStream) -> bool {
        self.allows(&stream.language)
    }
}
