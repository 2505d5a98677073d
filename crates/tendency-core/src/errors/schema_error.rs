//! Schema errors: expected columns and score cells.

use super::error_code::{self, ErrorCode};

/// Errors about the shape or content of the input tables.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("The column '{column}' was not found in {table}.")]
    MissingColumn { column: String, table: String },

    #[error("invalid score {value:?} in column '{column}' for record '{identity}'")]
    InvalidScore {
        identity: String,
        column: String,
        value: String,
    },
}

impl ErrorCode for SchemaError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingColumn { .. } => error_code::SCHEMA_MISSING,
            Self::InvalidScore { .. } => error_code::INVALID_SCORE,
        }
    }
}
