//! Membership model construction errors.

use super::error_code::{self, ErrorCode};

/// Errors raised when a trapezoid or universe definition is unusable.
#[derive(Debug, thiserror::Error)]
pub enum MembershipError {
    #[error("band {band} has decreasing breakpoints {breakpoints:?}")]
    NonMonotonic { band: String, breakpoints: [f64; 4] },

    #[error("band {band} has a non-finite breakpoint {breakpoints:?}")]
    NonFinite { band: String, breakpoints: [f64; 4] },

    #[error("universe [{min}, {max}] is empty")]
    EmptyUniverse { min: f64, max: f64 },
}

impl ErrorCode for MembershipError {
    fn error_code(&self) -> &'static str {
        error_code::MEMBERSHIP_ERROR
    }
}
