use serde::{Deserialize, Serialize};

use super::defaults;

/// Reference instrument (questionnaire) scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceConfig {
    /// Scale midpoint. Scores below it are Pole 1, the midpoint itself is Pole 2.
    pub midpoint: f64,
}

impl Default for ReferenceConfig {
    fn default() -> Self {
        Self {
            midpoint: defaults::DEFAULT_MIDPOINT,
        }
    }
}
