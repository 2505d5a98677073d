//! Tests for the comparison engine.

use std::collections::HashMap;

use proptest::prelude::*;
use tendency_core::errors::SchemaError;
use tendency_core::{Dimension, ScoreRecord, TendencyConfig};
use tendency_validation::ComparisonEngine;

#[derive(Debug, Clone)]
struct JoinedRow {
    identity: String,
    fields: HashMap<String, f64>,
}

impl ScoreRecord for JoinedRow {
    fn identity(&self) -> &str {
        &self.identity
    }

    fn score(&self, column: &str) -> Result<f64, SchemaError> {
        self.fields
            .get(column)
            .copied()
            .ok_or_else(|| SchemaError::MissingColumn {
                column: column.to_string(),
                table: "joined".to_string(),
            })
    }
}

/// Record with per-dimension (system, reference) pairs.
fn record(identity: &str, scores: [(f64, f64); 4]) -> JoinedRow {
    let mut fields = HashMap::new();
    for (d, (system, reference)) in Dimension::ALL.into_iter().zip(scores) {
        fields.insert(format!("{}_system", d.default_column()), system);
        fields.insert(format!("{}_questionnaire", d.default_column()), reference);
    }
    JoinedRow {
        identity: identity.to_string(),
        fields,
    }
}

fn sample_records() -> Vec<JoinedRow> {
    vec![
        record("Ada", [(1.0, 2.0), (9.5, 8.0), (4.5, 7.0), (5.5, 5.5)]),
        record("Grace", [(10.0, 10.0), (0.5, 1.0), (6.5, 6.0), (2.0, 9.0)]),
        record("Alan", [(3.0, 4.0), (7.0, 3.0), (8.0, 10.0), (5.0, 5.4999)]),
    ]
}

#[test]
fn rows_follow_record_then_dimension_order() {
    let outcome = ComparisonEngine::default().run(&sample_records()).unwrap();

    assert_eq!(outcome.records, 3);
    assert_eq!(outcome.rows.len(), 12);
    let identities: Vec<&str> = outcome.rows.iter().map(|r| r.identity()).collect();
    assert_eq!(&identities[0..4], &["Ada"; 4]);
    assert_eq!(&identities[4..8], &["Grace"; 4]);
    assert_eq!(outcome.rows[5].dimension(), Dimension::Perception);
}

#[test]
fn report_matches_expected_counts() {
    let outcome = ComparisonEngine::default().run(&sample_records()).unwrap();
    let report = &outcome.report;

    // Processing: Ada 1.0/2.0 match, Grace 10/10 match, Alan 3.0/4.0 match.
    assert_eq!(report.get(Dimension::Processing).unwrap().matches, 3);
    // Perception: Ada match, Grace match, Alan 7.0 vs 3.0 mismatch.
    assert_eq!(report.get(Dimension::Perception).unwrap().matches, 2);
    // Input: Ada 4.5 (pole 1) vs 7.0 (pole 2) mismatch; Grace match; Alan match.
    assert_eq!(report.get(Dimension::Input).unwrap().matches, 2);
    // Understanding: Ada 5.5/5.5 match; Grace mismatch; Alan 5.0 vs 5.4999 match.
    assert_eq!(report.get(Dimension::Understanding).unwrap().matches, 2);
    assert!(report.stats.iter().all(|s| s.total == 3));
}

#[test]
fn parallel_pass_equals_serial_pass() {
    let records = sample_records();
    let serial = ComparisonEngine::default().run(&records).unwrap();
    let parallel = ComparisonEngine::default()
        .with_parallel(true)
        .run(&records)
        .unwrap();
    assert_eq!(serial, parallel);
}

#[test]
fn repeated_runs_are_identical() {
    let engine = ComparisonEngine::default();
    let records = sample_records();
    assert_eq!(engine.run(&records).unwrap(), engine.run(&records).unwrap());
}

#[test]
fn schema_error_aborts_the_pass() {
    let mut records = sample_records();
    records[1]
        .fields
        .remove("style_score_Understanding_Style_system");
    let err = ComparisonEngine::default().run(&records).unwrap_err();
    assert!(err.to_string().contains("style_score_Understanding_Style_system"));
}

#[test]
fn from_config_honours_parallel_flag() {
    let mut config = TendencyConfig::default();
    config.engine.parallel = true;
    let engine = ComparisonEngine::from_config(&config).unwrap();
    assert!(engine.is_parallel());
}

#[test]
fn no_records_is_an_empty_outcome() {
    let outcome = ComparisonEngine::default().run::<JoinedRow>(&[]).unwrap();
    assert!(outcome.rows.is_empty());
    assert_eq!(outcome.report.stats.len(), 4);
}

proptest! {
    #[test]
    fn parallel_never_changes_the_table(
        scores in prop::collection::vec(
            prop::array::uniform4((0.0f64..=11.0, 0.0f64..=11.0)),
            0..40,
        )
    ) {
        let records: Vec<JoinedRow> = scores
            .into_iter()
            .enumerate()
            .map(|(i, s)| record(&format!("r{i}"), s))
            .collect();
        let serial = ComparisonEngine::default().run(&records).unwrap();
        let parallel = ComparisonEngine::default().with_parallel(true).run(&records).unwrap();
        prop_assert_eq!(serial, parallel);
    }
}
