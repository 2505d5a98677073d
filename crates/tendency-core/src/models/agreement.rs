use serde::Serialize;

use super::Dimension;

/// Agreement between the two classifiers for one dimension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AgreementStat {
    pub dimension: Dimension,
    /// Rows whose tendencies matched.
    pub matches: usize,
    /// Rows compared for this dimension.
    pub total: usize,
}

impl AgreementStat {
    /// `matches / total` in [0.0, 1.0]; 0.0 when no rows were compared.
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.matches as f64 / self.total as f64
        }
    }

    /// Agreement percentage in [0.0, 100.0].
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            100.0 * self.matches as f64 / self.total as f64
        }
    }
}

/// Per-dimension agreement, in `Dimension::ALL` order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgreementReport {
    pub stats: Vec<AgreementStat>,
}

impl AgreementReport {
    pub fn get(&self, dimension: Dimension) -> Option<&AgreementStat> {
        self.stats.iter().find(|s| s.dimension == dimension)
    }

    /// Pooled agreement over every row of every dimension.
    pub fn overall_percentage(&self) -> f64 {
        let matches: usize = self.stats.iter().map(|s| s.matches).sum();
        let total: usize = self.stats.iter().map(|s| s.total).sum();
        if total == 0 {
            0.0
        } else {
            100.0 * matches as f64 / total as f64
        }
    }

    pub fn total_rows(&self) -> usize {
        self.stats.iter().map(|s| s.total).sum()
    }
}
