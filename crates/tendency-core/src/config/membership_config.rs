use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Universe bounds and the four trapezoid bands of one dimension.
///
/// Each band is `[a, b, c, d]` with `a <= b <= c <= d`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MembershipConfig {
    pub universe_min: f64,
    pub universe_max: f64,
    pub pole1_pure: [f64; 4],
    pub pole1_leaning: [f64; 4],
    pub pole2_leaning: [f64; 4],
    pub pole2_pure: [f64; 4],
}

impl MembershipConfig {
    /// Bands as `(name, breakpoints)` pairs, pole 1 first.
    pub fn bands(&self) -> [(&'static str, [f64; 4]); 4] {
        [
            ("pole1_pure", self.pole1_pure),
            ("pole1_leaning", self.pole1_leaning),
            ("pole2_leaning", self.pole2_leaning),
            ("pole2_pure", self.pole2_pure),
        ]
    }

    /// Check universe bounds and band monotonicity. `prefix` names the
    /// config section in error messages.
    pub fn validate(&self, prefix: &str) -> Result<(), ConfigError> {
        if !self.universe_min.is_finite()
            || !self.universe_max.is_finite()
            || self.universe_min >= self.universe_max
        {
            return Err(ConfigError::ValidationFailed {
                field: format!("{prefix}.universe_min"),
                message: format!(
                    "universe [{}, {}] must be finite with min < max",
                    self.universe_min, self.universe_max
                ),
            });
        }
        for (name, points) in self.bands() {
            if points.iter().any(|p| !p.is_finite()) {
                return Err(ConfigError::ValidationFailed {
                    field: format!("{prefix}.{name}"),
                    message: "breakpoints must be finite".to_string(),
                });
            }
            if points.windows(2).any(|w| w[0] > w[1]) {
                return Err(ConfigError::ValidationFailed {
                    field: format!("{prefix}.{name}"),
                    message: format!("breakpoints {points:?} must be non-decreasing"),
                });
            }
        }
        Ok(())
    }
}

impl Default for MembershipConfig {
    fn default() -> Self {
        Self {
            universe_min: defaults::DEFAULT_UNIVERSE_MIN,
            universe_max: defaults::DEFAULT_UNIVERSE_MAX,
            pole1_pure: defaults::DEFAULT_POLE1_PURE,
            pole1_leaning: defaults::DEFAULT_POLE1_LEANING,
            pole2_leaning: defaults::DEFAULT_POLE2_LEANING,
            pole2_pure: defaults::DEFAULT_POLE2_PURE,
        }
    }
}
