//! Summary of one hook run
//!
//! Every stream the inspector reports ends up in the summary: either skipped
//! by the language filter, or attempted and recorded as extracted or failed.

use std::fmt;
use std::path::PathBuf;

use crate::error::CoreError;
use crate::media::SubtitleStream;

/// Process exit code for a successful run.
pub const EXIT_SUCCESS: u8 = 0;

/// Process exit code for a failed or rejected run.
pub const EXIT_FAILURE: u8 = 1;

/// Result of one extraction attempt.
#[derive(Debug)]
pub enum ExtractionOutcome {
    /// The stream was written to `output`.
    Extracted {
        stream: SubtitleStream,
        output: PathBuf,
    },
    /// ffmpeg could not be started or exited unsuccessfully.
    Failed {
        stream: SubtitleStream,
        error: CoreError,
    },
}

impl ExtractionOutcome {
    pub fn stream(&self) -> &SubtitleStream {
        match self {
            Self::Extracted { stream, .. } | Self::Failed { stream, .. } => stream,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Extracted { .. })
    }
}

/// Outcomes of all streams handled in one run, in processing order.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Streams dropped by the language filter
    pub skipped: Vec<SubtitleStream>,
    /// Streams handed to ffmpeg
    pub outcomes: Vec<ExtractionOutcome>,
}

impl RunSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_skipped(&mut self, stream: SubtitleStream) {
        self.skipped.push(stream);
    }

    pub fn record(&mut self, outcome: ExtractionOutcome) {
        self.outcomes.push(outcome);
    }

    /// Paths of the sidecar files written during the run.
    pub fn extracted(&self) -> Vec<&PathBuf> {
        self.outcomes
            .iter()
            .filter_map(|o| match o {
                ExtractionOutcome::Extracted { output, .. } => Some(output),
                ExtractionOutcome::Failed { .. } => None,
            })
            .collect()
    }

    /// The failed attempts together with their causes.
    pub fn failed(&self) -> Vec<(&SubtitleStream, &CoreError)> {
        self.outcomes
            .iter()
            .filter_map(|o| match o {
                ExtractionOutcome::Failed { stream, error } => Some((stream, error)),
                ExtractionOutcome::Extracted { .. } => None,
            })
            .collect()
    }

    pub fn has_failures(&self) -> bool {
        self.outcomes.iter().any(|o| !o.is_success())
    }

    /// Exit code for the run: any failed extraction fails the run, even when
    /// other streams were dumped. A run with nothing to extract succeeds.
    pub fn exit_code(&self) -> u8 {
        if self.has_failures() {
            EXIT_FAILURE
        } else {
            EXIT_SUCCESS
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} extracted, {} failed, {} skipped",
            self.extracted().len(),
            self.failed().len(),
            self.skipped.len()
        )
    }
}
