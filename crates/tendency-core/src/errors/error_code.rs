//! ErrorCode trait for structured error reporting.

/// Every error enum implements this to provide a stable error code string
/// for logs and for the CLI exit-code mapping.
pub trait ErrorCode {
    /// Returns the error code string (e.g., "SCHEMA_MISSING").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const MEMBERSHIP_ERROR: &str = "MEMBERSHIP_ERROR";
pub const INPUT_MISSING: &str = "INPUT_MISSING";
pub const INPUT_UNREADABLE: &str = "INPUT_UNREADABLE";
pub const UNSUPPORTED_FORMAT: &str = "UNSUPPORTED_FORMAT";
pub const SCHEMA_MISSING: &str = "SCHEMA_MISSING";
pub const INVALID_SCORE: &str = "INVALID_SCORE";
pub const JOIN_EMPTY: &str = "JOIN_EMPTY";
pub const OUTPUT_ERROR: &str = "OUTPUT_ERROR";
pub const UNEXPECTED: &str = "UNEXPECTED";
