//! Pipeline errors aggregating every subsystem.

use super::error_code::{self, ErrorCode};
use super::{ConfigError, InputError, MembershipError, OutputError, SchemaError};

/// Errors that can end a validation run.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Membership error: {0}")]
    Membership(#[from] MembershipError),

    #[error("Input error: {0}")]
    Input(#[from] InputError),

    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    #[error("Output error: {0}")]
    Output(#[from] OutputError),

    #[error("No common records found between {system} and {reference}.")]
    JoinEmpty { system: String, reference: String },

    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

impl ErrorCode for PipelineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Membership(e) => e.error_code(),
            Self::Input(e) => e.error_code(),
            Self::Schema(e) => e.error_code(),
            Self::Output(e) => e.error_code(),
            Self::JoinEmpty { .. } => error_code::JOIN_EMPTY,
            Self::Unexpected(_) => error_code::UNEXPECTED,
        }
    }
}

/// Result alias used across the pipeline crates.
pub type PipelineResult<T> = Result<T, PipelineError>;
