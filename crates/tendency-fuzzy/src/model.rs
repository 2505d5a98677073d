use serde::Serialize;
use tendency_core::config::{defaults, MembershipConfig};
use tendency_core::errors::MembershipError;
use tendency_core::Pole;

use crate::membership::Trapezoid;

/// The four semantic bands of one dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Band {
    Pole1Pure,
    Pole1Leaning,
    Pole2Leaning,
    Pole2Pure,
}

impl Band {
    pub const ALL: [Band; 4] = [
        Band::Pole1Pure,
        Band::Pole1Leaning,
        Band::Pole2Leaning,
        Band::Pole2Pure,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Pole1Pure => "Pole1_Pure",
            Self::Pole1Leaning => "Pole1_Leaning",
            Self::Pole2Leaning => "Pole2_Leaning",
            Self::Pole2Pure => "Pole2_Pure",
        }
    }

    /// Pole this band contributes to.
    pub fn pole(self) -> Pole {
        match self {
            Self::Pole1Pure | Self::Pole1Leaning => Pole::Pole1,
            Self::Pole2Leaning | Self::Pole2Pure => Pole::Pole2,
        }
    }
}

/// Membership model of one dimension: universe bounds plus four trapezoids.
///
/// Immutable after construction. Scores are clamped to the universe before
/// evaluation, so an out-of-range score takes the degree of the nearest
/// boundary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MembershipModel {
    universe_min: f64,
    universe_max: f64,
    pole1_pure: Trapezoid,
    pole1_leaning: Trapezoid,
    pole2_leaning: Trapezoid,
    pole2_pure: Trapezoid,
}

impl MembershipModel {
    pub fn new(
        universe: (f64, f64),
        pole1_pure: Trapezoid,
        pole1_leaning: Trapezoid,
        pole2_leaning: Trapezoid,
        pole2_pure: Trapezoid,
    ) -> Result<Self, MembershipError> {
        let (min, max) = universe;
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(MembershipError::EmptyUniverse { min, max });
        }
        Ok(Self {
            universe_min: min,
            universe_max: max,
            pole1_pure,
            pole1_leaning,
            pole2_leaning,
            pole2_pure,
        })
    }

    pub fn from_config(config: &MembershipConfig) -> Result<Self, MembershipError> {
        Self::new(
            (config.universe_min, config.universe_max),
            Trapezoid::new(Band::Pole1Pure.name(), config.pole1_pure)?,
            Trapezoid::new(Band::Pole1Leaning.name(), config.pole1_leaning)?,
            Trapezoid::new(Band::Pole2Leaning.name(), config.pole2_leaning)?,
            Trapezoid::new(Band::Pole2Pure.name(), config.pole2_pure)?,
        )
    }

    /// Default bands on the 0–11 universe.
    pub fn standard() -> Self {
        let [a, b, c, d] = defaults::DEFAULT_POLE1_PURE;
        let pole1_pure = Trapezoid::from_sorted(a, b, c, d);
        let [a, b, c, d] = defaults::DEFAULT_POLE1_LEANING;
        let pole1_leaning = Trapezoid::from_sorted(a, b, c, d);
        let [a, b, c, d] = defaults::DEFAULT_POLE2_LEANING;
        let pole2_leaning = Trapezoid::from_sorted(a, b, c, d);
        let [a, b, c, d] = defaults::DEFAULT_POLE2_PURE;
        let pole2_pure = Trapezoid::from_sorted(a, b, c, d);
        Self {
            universe_min: defaults::DEFAULT_UNIVERSE_MIN,
            universe_max: defaults::DEFAULT_UNIVERSE_MAX,
            pole1_pure,
            pole1_leaning,
            pole2_leaning,
            pole2_pure,
        }
    }

    pub fn universe(&self) -> (f64, f64) {
        (self.universe_min, self.universe_max)
    }

    pub fn band(&self, band: Band) -> &Trapezoid {
        match band {
            Band::Pole1Pure => &self.pole1_pure,
            Band::Pole1Leaning => &self.pole1_leaning,
            Band::Pole2Leaning => &self.pole2_leaning,
            Band::Pole2Pure => &self.pole2_pure,
        }
    }

    /// Clamp `score` into the universe. NaN is passed through.
    pub fn clamp(&self, score: f64) -> f64 {
        score.clamp(self.universe_min, self.universe_max)
    }

    /// Degree of `score` in `band`, in [0.0, 1.0].
    pub fn membership(&self, band: Band, score: f64) -> f64 {
        self.band(band).degree(self.clamp(score))
    }
}

impl Default for MembershipModel {
    fn default() -> Self {
        Self::standard()
    }
}
