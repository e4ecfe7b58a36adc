//! Command implementations for the CLI.

/// Module containing the Sonarr hook command.
/// Gates on the event type, then dumps allow-listed subtitle streams.
pub mod hook;
