use serde::Serialize;
use tendency_core::Tendency;

use crate::model::{Band, MembershipModel};

/// Dominant-pole rule over the two pole totals.
///
/// ```text
/// total_pole1 = μ(Pole1_Pure) + μ(Pole1_Leaning)
/// total_pole2 = μ(Pole2_Pure) + μ(Pole2_Leaning)
/// ```
///
/// The strictly larger total wins; equal totals (including both zero) are
/// `Undetermined`.
pub fn dominant_pole(model: &MembershipModel, score: f64) -> Tendency {
    let (pole1, pole2) = pole_totals(model, score);
    decide(pole1, pole2)
}

fn pole_totals(model: &MembershipModel, score: f64) -> (f64, f64) {
    let pole1 =
        model.membership(Band::Pole1Pure, score) + model.membership(Band::Pole1Leaning, score);
    let pole2 =
        model.membership(Band::Pole2Pure, score) + model.membership(Band::Pole2Leaning, score);
    (pole1, pole2)
}

fn decide(pole1: f64, pole2: f64) -> Tendency {
    if pole1 > pole2 {
        Tendency::Pole1
    } else if pole2 > pole1 {
        Tendency::Pole2
    } else {
        Tendency::Undetermined
    }
}

/// Every band degree behind one classification, for debugging/observability.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DominanceBreakdown {
    pub score: f64,
    /// Score after clamping to the universe.
    pub evaluated_at: f64,
    pub pole1_pure: f64,
    pub pole1_leaning: f64,
    pub pole2_leaning: f64,
    pub pole2_pure: f64,
    pub pole1_total: f64,
    pub pole2_total: f64,
    pub tendency: Tendency,
}

/// Classify with a full breakdown of each band.
pub fn compute_breakdown(model: &MembershipModel, score: f64) -> DominanceBreakdown {
    let pole1_pure = model.membership(Band::Pole1Pure, score);
    let pole1_leaning = model.membership(Band::Pole1Leaning, score);
    let pole2_leaning = model.membership(Band::Pole2Leaning, score);
    let pole2_pure = model.membership(Band::Pole2Pure, score);
    let pole1_total = pole1_pure + pole1_leaning;
    let pole2_total = pole2_pure + pole2_leaning;

    DominanceBreakdown {
        score,
        evaluated_at: model.clamp(score),
        pole1_pure,
        pole1_leaning,
        pole2_leaning,
        pole2_pure,
        pole1_total,
        pole2_total,
        tendency: decide(pole1_total, pole2_total),
    }
}

/// Fuzzy dominant-pole classifier bound to one dimension's membership model.
#[derive(Debug, Clone, PartialEq)]
pub struct FuzzyPoleClassifier {
    model: MembershipModel,
}

impl FuzzyPoleClassifier {
    pub fn new(model: MembershipModel) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &MembershipModel {
        &self.model
    }

    pub fn classify(&self, score: f64) -> Tendency {
        dominant_pole(&self.model, score)
    }

    pub fn breakdown(&self, score: f64) -> DominanceBreakdown {
        compute_breakdown(&self.model, score)
    }
}

impl Default for FuzzyPoleClassifier {
    fn default() -> Self {
        Self::new(MembershipModel::standard())
    }
}
