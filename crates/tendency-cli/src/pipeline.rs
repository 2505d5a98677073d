//! End-to-end validation run: read, check, join, compare, write.

use std::path::PathBuf;

use tendency_core::tracing_setup::events;
use tendency_core::{Dimension, PipelineError, PipelineResult, TendencyConfig};
use tendency_tables::{inner_join, read_table, write_comparison, JoinSpec, Table};
use tendency_validation::{ComparisonEngine, ComparisonOutcome};

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub outcome: ComparisonOutcome,
    pub output_path: PathBuf,
    /// Records surviving the join.
    pub joined: usize,
}

/// Run the whole pipeline for `config`.
///
/// Nothing is written unless every step before persistence succeeds. Both
/// source tables are checked for the key and every score column before the
/// join.
pub fn run_pipeline(config: &TendencyConfig) -> PipelineResult<RunSummary> {
    let engine = ComparisonEngine::from_config(config)?;

    let system = read_table(&config.input.system_path, "system")?;
    let reference = read_table(&config.input.reference_path, "reference")?;

    let required = required_columns(config);
    system.require_columns(required.as_slice())?;
    reference.require_columns(required.as_slice())?;

    let merged = inner_join(&system, &reference, &JoinSpec::from(&config.input))?;
    if merged.is_empty() {
        return Err(join_empty(&system, &reference));
    }

    let outcome = engine.run(merged.records())?;
    write_comparison(
        &config.output.path,
        &outcome.rows,
        config.output.score_precision,
    )?;

    Ok(RunSummary {
        joined: merged.len(),
        outcome,
        output_path: config.output.path.clone(),
    })
}

/// Key column followed by each dimension's base score column.
fn required_columns(config: &TendencyConfig) -> Vec<&str> {
    let mut columns = vec![config.input.key_column.as_str()];
    columns.extend(Dimension::ALL.iter().map(|&d| config.column_for(d)));
    columns
}

fn join_empty(system: &Table, reference: &Table) -> PipelineError {
    events::join_empty(system.source(), reference.source());
    PipelineError::JoinEmpty {
        system: system.source().to_string(),
        reference: reference.source().to_string(),
    }
}
