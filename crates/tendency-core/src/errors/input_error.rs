//! Input table errors.

use super::error_code::{self, ErrorCode};

/// Errors that can occur while locating and reading an input table.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("The file {path} was not found.")]
    FileNotFound { path: String },

    #[error("failed to read {path}: {message}")]
    Unreadable { path: String, message: String },

    #[error("unsupported table format for {path} (expected .csv or .json)")]
    UnsupportedFormat { path: String },
}

impl ErrorCode for InputError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::FileNotFound { .. } => error_code::INPUT_MISSING,
            Self::Unreadable { .. } => error_code::INPUT_UNREADABLE,
            Self::UnsupportedFormat { .. } => error_code::UNSUPPORTED_FORMAT,
        }
    }
}
