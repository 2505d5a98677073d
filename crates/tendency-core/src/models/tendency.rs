use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the two opposing ends of a dimension.
///
/// This is also the full output range of the crisp classifier, which has no
/// undetermined outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pole {
    #[serde(rename = "Pole_1_Tendency")]
    Pole1,
    #[serde(rename = "Pole_2_Tendency")]
    Pole2,
}

impl Pole {
    pub fn label(self) -> &'static str {
        match self {
            Self::Pole1 => "Pole_1_Tendency",
            Self::Pole2 => "Pole_2_Tendency",
        }
    }

    /// The other pole.
    pub fn opposite(self) -> Self {
        match self {
            Self::Pole1 => Self::Pole2,
            Self::Pole2 => Self::Pole1,
        }
    }
}

impl fmt::Display for Pole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Categorical outcome of the fuzzy classifier.
///
/// `Undetermined` is a real third outcome (equal pole totals), not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tendency {
    #[serde(rename = "Pole_1_Tendency")]
    Pole1,
    #[serde(rename = "Pole_2_Tendency")]
    Pole2,
    Undetermined,
}

impl Tendency {
    pub fn label(self) -> &'static str {
        match self {
            Self::Pole1 => "Pole_1_Tendency",
            Self::Pole2 => "Pole_2_Tendency",
            Self::Undetermined => "Undetermined",
        }
    }

    /// The pole this tendency resolves to, if any.
    pub fn pole(self) -> Option<Pole> {
        match self {
            Self::Pole1 => Some(Pole::Pole1),
            Self::Pole2 => Some(Pole::Pole2),
            Self::Undetermined => None,
        }
    }

    /// Position along the pole-1 → undetermined → pole-2 axis.
    pub fn rank(self) -> u8 {
        match self {
            Self::Pole1 => 0,
            Self::Undetermined => 1,
            Self::Pole2 => 2,
        }
    }

    /// Whether this tendency carries the same label as a crisp pole.
    pub fn agrees_with(self, pole: Pole) -> bool {
        self.label() == pole.label()
    }
}

impl From<Pole> for Tendency {
    fn from(pole: Pole) -> Self {
        match pole {
            Pole::Pole1 => Self::Pole1,
            Pole::Pole2 => Self::Pole2,
        }
    }
}

impl fmt::Display for Tendency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
