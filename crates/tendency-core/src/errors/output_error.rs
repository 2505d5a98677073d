//! Result table persistence errors.

use super::error_code::{self, ErrorCode};

/// Errors that can occur while writing the comparison table.
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("failed to write {path}: {message}")]
    WriteFailed { path: String, message: String },

    #[error("unsupported output format for {path} (expected .csv or .json)")]
    UnsupportedFormat { path: String },
}

impl ErrorCode for OutputError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::WriteFailed { .. } => error_code::OUTPUT_ERROR,
            Self::UnsupportedFormat { .. } => error_code::UNSUPPORTED_FORMAT,
        }
    }
}
