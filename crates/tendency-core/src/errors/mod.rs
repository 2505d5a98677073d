//! Error handling for tendency.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod input_error;
pub mod membership_error;
pub mod output_error;
pub mod pipeline_error;
pub mod schema_error;

pub use config_error::ConfigError;
pub use error_code::ErrorCode;
pub use input_error::InputError;
pub use membership_error::MembershipError;
pub use output_error::OutputError;
pub use pipeline_error::{PipelineError, PipelineResult};
pub use schema_error::SchemaError;
