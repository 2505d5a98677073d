use serde::{Deserialize, Serialize};

use super::MembershipConfig;

/// Per-dimension overrides. Unset fields fall back to the global sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DimensionConfig {
    /// Base name of the score column in both tables.
    pub column: Option<String>,
    /// Band and universe overrides, laid over the global `[membership]`.
    pub membership: Option<MembershipOverride>,
    /// Reference midpoint for this dimension only.
    pub midpoint: Option<f64>,
}

/// Partial `[membership]` table. Each set field replaces the global value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MembershipOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub universe_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub universe_max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pole1_pure: Option<[f64; 4]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pole1_leaning: Option<[f64; 4]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pole2_leaning: Option<[f64; 4]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pole2_pure: Option<[f64; 4]>,
}

impl MembershipOverride {
    /// `base` with every set field replaced.
    pub fn apply_to(&self, base: &MembershipConfig) -> MembershipConfig {
        MembershipConfig {
            universe_min: self.universe_min.unwrap_or(base.universe_min),
            universe_max: self.universe_max.unwrap_or(base.universe_max),
            pole1_pure: self.pole1_pure.unwrap_or(base.pole1_pure),
            pole1_leaning: self.pole1_leaning.unwrap_or(base.pole1_leaning),
            pole2_leaning: self.pole2_leaning.unwrap_or(base.pole2_leaning),
            pole2_pure: self.pole2_pure.unwrap_or(base.pole2_pure),
        }
    }
}
