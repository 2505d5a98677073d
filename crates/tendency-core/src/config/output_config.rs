use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Result table persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Destination of the comparison table (.csv or .json).
    pub path: PathBuf,
    /// Decimal places kept for the scores in the written table.
    pub score_precision: u32,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(defaults::DEFAULT_OUTPUT_PATH),
            score_precision: defaults::DEFAULT_SCORE_PRECISION,
        }
    }
}
