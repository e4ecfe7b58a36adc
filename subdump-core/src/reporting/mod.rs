//! Run reporting module
//!
//! This module collects the per-stream results of a hook run and turns them
//! into a summary that decides the process exit code.

pub mod summary;

pub use summary::{ExtractionOutcome, RunSummary};
