//! Configuration system for tendency.
//! TOML-based, layered resolution: CLI > env > config file > defaults.

pub mod defaults;
pub mod dimension_config;
pub mod engine_config;
pub mod input_config;
pub mod membership_config;
pub mod output_config;
pub mod reference_config;
pub mod tendency_config;

pub use dimension_config::{DimensionConfig, MembershipOverride};
pub use engine_config::EngineConfig;
pub use input_config::InputConfig;
pub use membership_config::MembershipConfig;
pub use output_config::OutputConfig;
pub use reference_config::ReferenceConfig;
pub use tendency_config::{CliOverrides, TendencyConfig};
