//! Single-score inspection for `tendency classify`.

use std::fmt::Write;

use tendency_core::errors::MembershipError;
use tendency_core::{Dimension, Pole, Tendency, TendencyConfig};
use tendency_fuzzy::{
    Band, CrispPoleClassifier, DominanceBreakdown, FuzzyPoleClassifier, MembershipModel,
};

/// Both verdicts for one score, plus the band degrees behind the fuzzy one.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub dimension: Option<Dimension>,
    pub breakdown: DominanceBreakdown,
    pub crisp: Pole,
    pub midpoint: f64,
}

/// Classify `score` with the bands and midpoint configured for `dimension`,
/// or the global ones when no dimension is given.
pub fn classify_score(
    config: &TendencyConfig,
    dimension: Option<Dimension>,
    score: f64,
) -> Result<Classification, MembershipError> {
    let (membership, midpoint) = match dimension {
        Some(d) => (config.membership_for(d), config.midpoint_for(d)),
        None => (config.membership.clone(), config.reference.midpoint),
    };
    let fuzzy = FuzzyPoleClassifier::new(MembershipModel::from_config(&membership)?);
    let crisp = CrispPoleClassifier::new(midpoint);
    Ok(Classification {
        dimension,
        breakdown: fuzzy.breakdown(score),
        crisp: crisp.classify(score),
        midpoint,
    })
}

fn pole_name(dimension: Option<Dimension>, pole: Pole) -> &'static str {
    match (dimension, pole) {
        (Some(d), Pole::Pole1) => d.pole_names().0,
        (Some(d), Pole::Pole2) => d.pole_names().1,
        (None, Pole::Pole1) => "pole 1",
        (None, Pole::Pole2) => "pole 2",
    }
}

fn tendency_name(dimension: Option<Dimension>, tendency: Tendency) -> &'static str {
    match tendency.pole() {
        Some(pole) => pole_name(dimension, pole),
        None => "no dominant pole",
    }
}

/// Human-readable breakdown.
pub fn render_classification(c: &Classification) -> String {
    let b = &c.breakdown;
    let mut out = String::new();
    if let Some(d) = c.dimension {
        let _ = writeln!(out, "Dimension: {d}");
    }
    let _ = writeln!(out, "Score: {} (evaluated at {})", b.score, b.evaluated_at);
    for (band, degree) in Band::ALL.iter().zip([
        b.pole1_pure,
        b.pole1_leaning,
        b.pole2_leaning,
        b.pole2_pure,
    ]) {
        let _ = writeln!(out, "  {:<14}{:.4}", band.name(), degree);
    }
    let _ = writeln!(
        out,
        "Pole 1 total: {:.4} | Pole 2 total: {:.4}",
        b.pole1_total, b.pole2_total
    );
    let _ = writeln!(
        out,
        "Fuzzy tendency: {} ({})",
        b.tendency,
        tendency_name(c.dimension, b.tendency)
    );
    let _ = writeln!(
        out,
        "Crisp tendency: {} ({}, midpoint {})",
        c.crisp,
        pole_name(c.dimension, c.crisp),
        c.midpoint
    );
    out
}
