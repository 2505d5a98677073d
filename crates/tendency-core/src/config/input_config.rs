use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Input tables and join settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Table produced by the fuzzy system.
    pub system_path: PathBuf,
    /// Table produced by the reference questionnaire.
    pub reference_path: PathBuf,
    /// Column holding the person's name in both tables.
    pub key_column: String,
    /// Suffix appended to system columns that collide on join.
    pub system_suffix: String,
    /// Suffix appended to reference columns that collide on join.
    pub reference_suffix: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            system_path: PathBuf::from(defaults::DEFAULT_SYSTEM_PATH),
            reference_path: PathBuf::from(defaults::DEFAULT_REFERENCE_PATH),
            key_column: defaults::DEFAULT_KEY_COLUMN.to_string(),
            system_suffix: defaults::DEFAULT_SYSTEM_SUFFIX.to_string(),
            reference_suffix: defaults::DEFAULT_REFERENCE_SUFFIX.to_string(),
        }
    }
}
