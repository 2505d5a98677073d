//! Aggregator: folds comparison rows into per-dimension agreement.

use tendency_core::{AgreementReport, AgreementStat, ComparisonRow, Dimension};

/// Agreement for a single dimension. Rows of other dimensions are ignored.
pub fn agreement_for(rows: &[ComparisonRow], dimension: Dimension) -> AgreementStat {
    let (matches, total) = rows
        .iter()
        .filter(|r| r.dimension() == dimension)
        .fold((0usize, 0usize), |(m, t), r| (m + usize::from(r.matched()), t + 1));
    AgreementStat {
        dimension,
        matches,
        total,
    }
}

/// One statistic per dimension, in `Dimension::ALL` order. A dimension with
/// no rows reports 0 of 0.
pub fn aggregate(rows: &[ComparisonRow]) -> AgreementReport {
    AgreementReport {
        stats: Dimension::ALL
            .into_iter()
            .map(|d| agreement_for(rows, d))
            .collect(),
    }
}
