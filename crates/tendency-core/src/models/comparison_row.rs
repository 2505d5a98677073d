use serde::Serialize;

use super::{Dimension, Pole, Tendency};

/// One (record, dimension) comparison between the fuzzy system and the
/// reference instrument. Immutable once built; `matched` is derived from the
/// two tendencies at construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    identity: String,
    dimension: Dimension,
    system_score: f64,
    reference_score: f64,
    system_tendency: Tendency,
    reference_tendency: Pole,
    matched: bool,
}

impl ComparisonRow {
    pub fn new(
        identity: impl Into<String>,
        dimension: Dimension,
        system_score: f64,
        reference_score: f64,
        system_tendency: Tendency,
        reference_tendency: Pole,
    ) -> Self {
        Self {
            identity: identity.into(),
            dimension,
            system_score,
            reference_score,
            system_tendency,
            reference_tendency,
            matched: system_tendency.agrees_with(reference_tendency),
        }
    }

    pub fn identity(&self) -> &str {
        &self.identity
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    pub fn system_score(&self) -> f64 {
        self.system_score
    }

    pub fn reference_score(&self) -> f64 {
        self.reference_score
    }

    pub fn system_tendency(&self) -> Tendency {
        self.system_tendency
    }

    pub fn reference_tendency(&self) -> Pole {
        self.reference_tendency
    }

    pub fn matched(&self) -> bool {
        self.matched
    }
}
