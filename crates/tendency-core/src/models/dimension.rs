use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One learning-style axis, evaluated independently of the others.
///
/// The set is fixed; `Dimension::ALL` is the canonical order used for the
/// result table and the agreement report.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Dimension {
    Processing,
    Perception,
    Input,
    Understanding,
}

impl Dimension {
    pub const ALL: [Dimension; 4] = [
        Dimension::Processing,
        Dimension::Perception,
        Dimension::Input,
        Dimension::Understanding,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Processing => "Processing",
            Self::Perception => "Perception",
            Self::Input => "Input",
            Self::Understanding => "Understanding",
        }
    }

    /// Base name of the score column in both input tables.
    pub fn default_column(self) -> &'static str {
        match self {
            Self::Processing => "style_score_Processing_Style",
            Self::Perception => "style_score_Perception_Style",
            Self::Input => "style_score_Input_Modality_Style",
            Self::Understanding => "style_score_Understanding_Style",
        }
    }

    /// Display names of (Pole 1, Pole 2).
    pub fn pole_names(self) -> (&'static str, &'static str) {
        match self {
            Self::Processing => ("Active", "Reflective"),
            Self::Perception => ("Sensing", "Intuitive"),
            Self::Input => ("Visual", "Verbal"),
            Self::Understanding => ("Sequential", "Global"),
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown dimension name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown dimension '{0}' (expected Processing, Perception, Input, or Understanding)")]
pub struct UnknownDimension(pub String);

impl FromStr for Dimension {
    type Err = UnknownDimension;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownDimension(s.to_string()))
    }
}
