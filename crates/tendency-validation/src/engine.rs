//! ComparisonEngine: the full comparison pass over a joined record set.

use rayon::prelude::*;
use tendency_core::errors::{MembershipError, SchemaError};
use tendency_core::tracing_setup::events;
use tendency_core::{AgreementReport, ComparisonRow, ScoreRecord, TendencyConfig};

use crate::aggregator;
use crate::comparator::DimensionComparator;

/// Result table plus its agreement summary.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonOutcome {
    /// Rows in record order, then dimension order.
    pub rows: Vec<ComparisonRow>,
    pub report: AgreementReport,
    /// Joined records compared.
    pub records: usize,
}

/// Runs the comparator over every record and aggregates the rows.
#[derive(Debug, Clone)]
pub struct ComparisonEngine {
    comparator: DimensionComparator,
    parallel: bool,
}

impl ComparisonEngine {
    pub fn new(comparator: DimensionComparator) -> Self {
        Self {
            comparator,
            parallel: false,
        }
    }

    pub fn from_config(config: &TendencyConfig) -> Result<Self, MembershipError> {
        let comparator = DimensionComparator::from_config(config)?;
        Ok(Self::new(comparator).with_parallel(config.engine.parallel))
    }

    /// Evaluate records on the rayon pool. Row order is unchanged.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn comparator(&self) -> &DimensionComparator {
        &self.comparator
    }

    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// Compare every record. The first schema error aborts the pass and no
    /// rows are returned.
    pub fn run<R: ScoreRecord + Sync>(
        &self,
        records: &[R],
    ) -> Result<ComparisonOutcome, SchemaError> {
        let per_record: Vec<Vec<ComparisonRow>> = if self.parallel {
            records
                .par_iter()
                .map(|r| self.comparator.compare_record(r))
                .collect::<Result<Vec<_>, SchemaError>>()?
        } else {
            records
                .iter()
                .map(|r| self.comparator.compare_record(r))
                .collect::<Result<Vec<_>, SchemaError>>()?
        };
        let rows: Vec<ComparisonRow> = per_record.into_iter().flatten().collect();

        let report = aggregator::aggregate(&rows);
        for stat in &report.stats {
            events::dimension_compared(stat);
        }
        events::run_completed(records.len(), rows.len(), report.overall_percentage());

        Ok(ComparisonOutcome {
            rows,
            report,
            records: records.len(),
        })
    }
}

impl Default for ComparisonEngine {
    fn default() -> Self {
        Self::new(DimensionComparator::standard())
    }
}
