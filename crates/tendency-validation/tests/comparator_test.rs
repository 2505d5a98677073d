//! Tests for the dimension comparator.

use std::collections::HashMap;

use tendency_core::errors::SchemaError;
use tendency_core::{Dimension, Pole, ScoreRecord, Tendency, TendencyConfig};
use tendency_validation::DimensionComparator;

/// Minimal joined record keyed by column name.
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

/// Record with the same (system, reference) pair on every dimension.
fn uniform_row(identity: &str, system: f64, reference: f64) -> JoinedRow {
    let mut fields = HashMap::new();
    for d in Dimension::ALL {
        fields.insert(format!("{}_system", d.default_column()), system);
        fields.insert(format!("{}_questionnaire", d.default_column()), reference);
    }
    JoinedRow {
        identity: identity.to_string(),
        fields,
    }
}

#[test]
fn one_row_per_dimension_in_fixed_order() {
    let comparator = DimensionComparator::standard();
    let rows = comparator
        .compare_record(&uniform_row("Ada_Lovelace", 2.0, 1.0))
        .unwrap();

    let dims: Vec<Dimension> = rows.iter().map(|r| r.dimension()).collect();
    assert_eq!(dims, Dimension::ALL.to_vec());
    assert!(rows.iter().all(|r| r.identity() == "Ada_Lovelace"));
    assert!(rows.iter().all(|r| r.matched()));
}

#[test]
fn midpoint_scores_on_both_sides() {
    let comparator = DimensionComparator::standard();
    let rows = comparator
        .compare_record(&uniform_row("Grace", 5.5, 5.5))
        .unwrap();
    let row = &rows[0];

    assert_eq!(row.reference_tendency(), Pole::Pole2);
    let spec = comparator.spec(Dimension::Processing).unwrap();
    let expected = spec.fuzzy.classify(5.5);
    assert_eq!(row.system_tendency(), expected);
    assert_eq!(row.matched(), expected == Tendency::Pole2);
}

#[test]
fn disagreement_is_not_a_match() {
    let comparator = DimensionComparator::standard();
    let rows = comparator
        .compare_record(&uniform_row("Alan", 1.0, 9.0))
        .unwrap();
    assert!(rows.iter().all(|r| r.system_tendency() == Tendency::Pole1));
    assert!(rows.iter().all(|r| r.reference_tendency() == Pole::Pole2));
    assert!(rows.iter().all(|r| !r.matched()));
}

#[test]
fn undetermined_always_counts_as_mismatch() {
    let config = TendencyConfig::from_toml(
        r#"
[membership]
pole2_leaning = [5, 7, 8, 9]
pole2_pure = [8, 10, 11, 11]
"#,
    )
    .unwrap();
    let comparator = DimensionComparator::from_config(&config).unwrap();

    for reference in [0.0, 11.0] {
        let rows = comparator
            .compare_record(&uniform_row("Edsger", 5.5, reference))
            .unwrap();
        for row in rows {
            assert_eq!(row.system_tendency(), Tendency::Undetermined);
            assert!(!row.matched());
        }
    }
}

#[test]
fn missing_column_names_the_field() {
    let comparator = DimensionComparator::standard();
    let mut row = uniform_row("Barbara", 3.0, 3.0);
    row.fields
        .remove("style_score_Perception_Style_questionnaire");

    let err = comparator.compare_record(&row).unwrap_err();
    match err {
        SchemaError::MissingColumn { column, .. } => {
            assert_eq!(column, "style_score_Perception_Style_questionnaire");
        }
        other => panic!("expected MissingColumn, got {other:?}"),
    }
}

#[test]
fn config_overrides_reach_the_classifiers() {
    let config = TendencyConfig::from_toml(
        r#"
[input]
system_suffix = "_fis"
reference_suffix = "_ils"

[dimensions.Perception]
column = "sns_int"
midpoint = 3.0
"#,
    )
    .unwrap();
    config.validate().unwrap();
    let comparator = DimensionComparator::from_config(&config).unwrap();

    let spec = comparator.spec(Dimension::Perception).unwrap();
    assert_eq!(comparator.system_column(spec), "sns_int_fis");
    assert_eq!(comparator.reference_column(spec), "sns_int_ils");
    assert_eq!(spec.crisp.classify(3.0), Pole::Pole2);
    assert_eq!(spec.crisp.classify(2.9), Pole::Pole1);

    let other = comparator.spec(Dimension::Processing).unwrap();
    assert_eq!(other.crisp.midpoint(), 5.5);
}

#[test]
fn standard_comparator_equals_default_config() {
    let from_config = DimensionComparator::from_config(&TendencyConfig::default()).unwrap();
    assert_eq!(from_config, DimensionComparator::standard());
}
