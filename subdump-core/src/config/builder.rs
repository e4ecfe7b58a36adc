// ============================================================================
// subdump-core/src/config/builder.rs
// ============================================================================
//
// CONFIGURATION BUILDER: Builder Pattern for CoreConfig
//
// This module implements the builder pattern for the CoreConfig structure,
// providing a fluent API for creating CoreConfig instances that start from
// the library defaults.
//
// AI-ASSISTANT-INFO: Builder pattern implementation for CoreConfig

// ---- Internal crate imports ----
use super::CoreConfig;

/// Builder for creating CoreConfig instances.
///
/// Every field starts at its default; only the overridden ones need to be set.
///
/// # Examples
///
/// ```rust
/// use subdump_core::config::CoreConfigBuilder;
///
/// let config = CoreConfigBuilder::new()
///     .languages(["eng"])
///     .ffprobe_name("/opt/ffmpeg/bin/ffprobe")
///     .build();
///
/// assert_eq!(config.languages, vec!["eng".to_string()]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CoreConfigBuilder {
    config: CoreConfig,
}

impl CoreConfigBuilder {
    /// Creates a new builder holding the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the language allow-list.
    pub fn languages<I, S>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.languages = languages.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the output subtitle format.
    pub fn subtitle_format(mut self, format: impl Into<String>) -> Self {
        self.config.subtitle_format = format.into();
        self
    }

    /// Sets the prober executable name or path.
    pub fn ffprobe_name(mut self, name: impl Into<String>) -> Self {
        self.config.ffprobe_name = name.into();
        self
    }

    /// Sets the transcoder executable name or path.
    pub fn ffmpeg_name(mut self, name: impl Into<String>) -> Self {
        self.config.ffmpeg_name = name.into();
        self
    }

    /// Builds the CoreConfig instance.
    pub fn build(self) -> CoreConfig {
        self.config
    }
}
