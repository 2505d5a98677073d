//! Tests for per-dimension agreement aggregation.

use proptest::prelude::*;
use tendency_core::{ComparisonRow, Dimension, Pole, Tendency};
use tendency_validation::aggregate;
use tendency_validation::aggregator::agreement_for;

fn row(dimension: Dimension, matched: bool) -> ComparisonRow {
    let system = if matched { Tendency::Pole1 } else { Tendency::Pole2 };
    ComparisonRow::new("r", dimension, 1.0, 1.0, system, Pole::Pole1)
}

#[test]
fn seven_of_ten_is_seventy_percent() {
    let rows: Vec<ComparisonRow> = (0..10)
        .map(|i| row(Dimension::Processing, i < 7))
        .collect();
    let stat = agreement_for(&rows, Dimension::Processing);
    assert_eq!(stat.matches, 7);
    assert_eq!(stat.total, 10);
    assert_eq!(format!("{:.2}", stat.percentage()), "70.00");
    assert!((stat.percentage() - 70.0).abs() < 1e-12);
}

#[test]
fn report_covers_every_dimension_in_order() {
    let rows = vec![row(Dimension::Input, true), row(Dimension::Input, false)];
    let report = aggregate(&rows);

    let dims: Vec<Dimension> = report.stats.iter().map(|s| s.dimension).collect();
    assert_eq!(dims, Dimension::ALL.to_vec());

    let input = report.get(Dimension::Input).unwrap();
    assert_eq!(input.percentage(), 50.0);

    // Dimensions without rows are 0 of 0, not an error.
    let processing = report.get(Dimension::Processing).unwrap();
    assert_eq!(processing.total, 0);
    assert_eq!(processing.percentage(), 0.0);
}

#[test]
fn empty_table_reports_zero_everywhere() {
    let report = aggregate(&[]);
    assert_eq!(report.stats.len(), 4);
    assert!(report.stats.iter().all(|s| s.percentage() == 0.0));
    assert_eq!(report.overall_percentage(), 0.0);
}

#[test]
fn undetermined_rows_count_in_the_denominator() {
    let perception = |identity: &str, system: Tendency| {
        ComparisonRow::new(identity, Dimension::Perception, 5.0, 2.0, system, Pole::Pole1)
    };
    let rows = vec![
        perception("a", Tendency::Pole1),
        perception("b", Tendency::Undetermined),
    ];
    let stat = agreement_for(&rows, Dimension::Perception);
    assert_eq!((stat.matches, stat.total), (1, 2));
}

proptest! {
    #[test]
    fn aggregate_counts_every_row_once(
        flags in prop::collection::vec((0usize..4, any::<bool>()), 0..200)
    ) {
        let rows: Vec<ComparisonRow> = flags
            .iter()
            .map(|(d, m)| row(Dimension::ALL[*d], *m))
            .collect();
        let report = aggregate(&rows);

        prop_assert_eq!(report.total_rows(), rows.len());
        let matches: usize = report.stats.iter().map(|s| s.matches).sum();
        prop_assert_eq!(matches, rows.iter().filter(|r| r.matched()).count());
        for stat in &report.stats {
            prop_assert!(stat.matches <= stat.total);
            prop_assert!((0.0..=100.0).contains(&stat.percentage()));
        }
    }
}
