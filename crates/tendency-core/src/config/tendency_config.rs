//! Top-level tendency configuration with layered resolution.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{
    DimensionConfig, EngineConfig, InputConfig, MembershipConfig, OutputConfig, ReferenceConfig,
};
use crate::constants::{MAX_SCORE_PRECISION, PROJECT_CONFIG_FILENAME};
use crate::errors::ConfigError;
use crate::models::Dimension;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`TENDENCY_*`)
/// 3. Config file (explicit path, or `tendency.toml` in the project root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TendencyConfig {
    pub input: InputConfig,
    pub output: OutputConfig,
    pub membership: MembershipConfig,
    pub reference: ReferenceConfig,
    pub engine: EngineConfig,
    /// Overrides keyed by dimension name (`Processing`, `Perception`, ...).
    pub dimensions: BTreeMap<String, DimensionConfig>,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub system_path: Option<PathBuf>,
    pub reference_path: Option<PathBuf>,
    pub output_path: Option<PathBuf>,
    pub midpoint: Option<f64>,
    pub parallel: Option<bool>,
}

impl TendencyConfig {
    /// Load configuration with layered resolution.
    ///
    /// An explicit `config_path` must exist; the project file in `root` is
    /// optional.
    pub fn load(
        root: &Path,
        config_path: Option<&Path>,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = match config_path {
            Some(path) => Self::from_file(path)?,
            None => {
                let project = root.join(PROJECT_CONFIG_FILENAME);
                if project.exists() {
                    Self::from_file(&project)?
                } else {
                    Self::default()
                }
            }
        };

        Self::apply_env_overrides(&mut config);

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Read and parse a TOML file. Unknown keys are ignored.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.membership.validate("membership")?;

        if !self.reference.midpoint.is_finite() {
            return Err(ConfigError::ValidationFailed {
                field: "reference.midpoint".to_string(),
                message: "must be a finite number".to_string(),
            });
        }
        if self.output.score_precision > MAX_SCORE_PRECISION {
            return Err(ConfigError::ValidationFailed {
                field: "output.score_precision".to_string(),
                message: format!("must be at most {MAX_SCORE_PRECISION}"),
            });
        }
        if self.input.key_column.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "input.key_column".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.input.system_suffix.is_empty()
            || self.input.reference_suffix.is_empty()
            || self.input.system_suffix == self.input.reference_suffix
        {
            return Err(ConfigError::ValidationFailed {
                field: "input.system_suffix".to_string(),
                message: "join suffixes must be non-empty and distinct".to_string(),
            });
        }

        for (name, dim) in &self.dimensions {
            let dimension = name
                .parse::<Dimension>()
                .map_err(|e| ConfigError::ValidationFailed {
                    field: format!("dimensions.{name}"),
                    message: e.to_string(),
                })?;
            if let Some(membership) = &dim.membership {
                membership
                    .apply_to(&self.membership)
                    .validate(&format!("dimensions.{dimension}.membership"))?;
            }
            if let Some(midpoint) = dim.midpoint {
                if !midpoint.is_finite() {
                    return Err(ConfigError::ValidationFailed {
                        field: format!("dimensions.{dimension}.midpoint"),
                        message: "must be a finite number".to_string(),
                    });
                }
            }
            if let Some(column) = &dim.column {
                if column.trim().is_empty() {
                    return Err(ConfigError::ValidationFailed {
                        field: format!("dimensions.{dimension}.column"),
                        message: "must not be empty".to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Override block for `dimension`, matched case-insensitively by name.
    fn dimension_override(&self, dimension: Dimension) -> Option<&DimensionConfig> {
        self.dimensions
            .iter()
            .find(|(name, _)| name.trim().eq_ignore_ascii_case(dimension.name()))
            .map(|(_, cfg)| cfg)
    }

    /// Base score column for `dimension`.
    pub fn column_for(&self, dimension: Dimension) -> &str {
        self.dimension_override(dimension)
            .and_then(|d| d.column.as_deref())
            .unwrap_or_else(|| dimension.default_column())
    }

    /// Membership bands for `dimension`: the global table with the
    /// dimension's overrides applied.
    pub fn membership_for(&self, dimension: Dimension) -> MembershipConfig {
        match self
            .dimension_override(dimension)
            .and_then(|d| d.membership.as_ref())
        {
            Some(overrides) => overrides.apply_to(&self.membership),
            None => self.membership.clone(),
        }
    }

    /// Reference midpoint for `dimension`.
    pub fn midpoint_for(&self, dimension: Dimension) -> f64 {
        self.dimension_override(dimension)
            .and_then(|d| d.midpoint)
            .unwrap_or(self.reference.midpoint)
    }

    /// Set the midpoint for every dimension. Per-dimension midpoints from a
    /// lower layer are cleared.
    fn set_midpoint(&mut self, midpoint: f64) {
        self.reference.midpoint = midpoint;
        for dim in self.dimensions.values_mut() {
            dim.midpoint = None;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `TENDENCY_SYSTEM_PATH`, `TENDENCY_MIDPOINT`, etc.
    fn apply_env_overrides(config: &mut TendencyConfig) {
        if let Ok(val) = std::env::var("TENDENCY_SYSTEM_PATH") {
            config.input.system_path = PathBuf::from(val);
        }
        if let Ok(val) = std::env::var("TENDENCY_REFERENCE_PATH") {
            config.input.reference_path = PathBuf::from(val);
        }
        if let Ok(val) = std::env::var("TENDENCY_OUTPUT_PATH") {
            config.output.path = PathBuf::from(val);
        }
        if let Ok(val) = std::env::var("TENDENCY_MIDPOINT") {
            if let Ok(v) = val.parse::<f64>() {
                config.set_midpoint(v);
            }
        }
        if let Ok(val) = std::env::var("TENDENCY_PARALLEL") {
            if let Ok(v) = val.parse::<bool>() {
                config.engine.parallel = v;
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut TendencyConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.system_path {
            config.input.system_path = v.clone();
        }
        if let Some(ref v) = cli.reference_path {
            config.input.reference_path = v.clone();
        }
        if let Some(ref v) = cli.output_path {
            config.output.path = v.clone();
        }
        if let Some(v) = cli.midpoint {
            config.set_midpoint(v);
        }
        if let Some(v) = cli.parallel {
            config.engine.parallel = v;
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
