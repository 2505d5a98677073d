//! # tendency-cli
//!
//! Orchestration behind the `tendency` binary: the end-to-end validation
//! pipeline, console rendering, and the error to exit-code mapping.

pub mod classify;
pub mod exit_code;
pub mod pipeline;
pub mod report;

pub use exit_code::{exit_code_for_error, CliExitCode};
pub use pipeline::{run_pipeline, RunSummary};
