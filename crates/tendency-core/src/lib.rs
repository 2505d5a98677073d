//! # tendency-core
//!
//! Foundation crate for the tendency agreement validator.
//! Defines the shared types, the score-record trait, errors, config,
//! constants, and tracing setup. Every other crate in the workspace
//! depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;
pub mod tracing_setup;

// Re-export the most commonly used types at the crate root.
pub use config::TendencyConfig;
pub use errors::{ErrorCode, PipelineError, PipelineResult};
pub use models::{AgreementReport, AgreementStat, ComparisonRow, Dimension, Pole, Tendency};
pub use traits::ScoreRecord;
