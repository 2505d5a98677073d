//! Structured log events for key pipeline steps.
//!
//! Each function emits a `tracing` event with structured fields.

use crate::models::{AgreementStat, Dimension};

/// Log that an input table was read.
pub fn table_loaded(role: &str, path: &str, rows: usize, columns: usize) {
    tracing::info!(
        event = "table_loaded",
        role = %role,
        path = %path,
        rows = rows,
        columns = columns,
        "input table loaded"
    );
}

/// Log the outcome of the inner join.
pub fn join_completed(system_rows: usize, reference_rows: usize, joined: usize) {
    tracing::info!(
        event = "join_completed",
        system_rows = system_rows,
        reference_rows = reference_rows,
        joined = joined,
        "{joined} common records found for comparison"
    );
}

/// Log an empty join. The run stops after this.
pub fn join_empty(system_path: &str, reference_path: &str) {
    tracing::warn!(
        event = "join_empty",
        system = %system_path,
        reference = %reference_path,
        "no common records found between the two tables"
    );
}

/// Log the agreement for one dimension.
pub fn dimension_compared(stat: &AgreementStat) {
    tracing::debug!(
        event = "dimension_compared",
        dimension = %stat.dimension,
        matches = stat.matches,
        total = stat.total,
        percentage = stat.percentage(),
        "dimension compared"
    );
}

/// Log a single classification with its pole totals.
pub fn score_classified(dimension: Dimension, score: f64, pole1: f64, pole2: f64, label: &str) {
    tracing::trace!(
        event = "score_classified",
        dimension = %dimension,
        score = score,
        pole1_total = pole1,
        pole2_total = pole2,
        tendency = %label,
        "score classified"
    );
}

/// Log the end of the comparison pass.
pub fn run_completed(records: usize, rows: usize, overall_percentage: f64) {
    tracing::info!(
        event = "run_completed",
        records = records,
        rows = rows,
        overall_percentage = overall_percentage,
        "comparison completed"
    );
}

/// Log that the result table was persisted.
pub fn output_written(path: &str, rows: usize) {
    tracing::info!(
        event = "output_written",
        path = %path,
        rows = rows,
        "comparison table written"
    );
}
