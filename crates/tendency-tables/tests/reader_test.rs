//! Tests for the table readers.

use std::fs;

use tendency_core::errors::InputError;
use tendency_core::ErrorCode;
use tendency_tables::read_table;

#[test]
fn golden_csv_reads_every_row_and_column() {
    let table = read_table(&test_fixtures::system_table(), "system").unwrap();
    assert_eq!(table.len(), 5);
    assert_eq!(table.headers().len(), 6);
    assert_eq!(table.cell(1, "student_name"), Some("Grace Hopper"));
    assert_eq!(table.cell(3, "style_score_Understanding_Style"), Some("9.0"));
}

#[test]
fn csv_cells_keep_surrounding_whitespace() {
    let table = read_table(&test_fixtures::questionnaire_table(), "reference").unwrap();
    assert_eq!(table.cell(1, "student_name"), Some(" Grace Hopper"));
}

#[test]
fn json_numbers_and_numeric_strings_become_cells() {
    let table = read_table(&test_fixtures::questionnaire_table_json(), "reference").unwrap();
    assert_eq!(table.len(), 5);
    assert_eq!(table.cell(0, "style_score_Processing_Style"), Some("2.0"));
    assert_eq!(table.cell(1, "style_score_Processing_Style"), Some("10"));
    assert_eq!(table.cell(2, "style_score_Understanding_Style"), Some("5.4999"));
}

#[test]
fn missing_file_reports_its_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("system_results.csv");
    let err = read_table(&path, "system").unwrap_err();

    assert_eq!(err.error_code(), "INPUT_MISSING");
    assert_eq!(
        err.to_string(),
        format!("The file {} was not found.", path.display())
    );
}

#[test]
fn spreadsheet_extension_is_unsupported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("system_results.xlsx");
    fs::write(&path, b"PK").unwrap();
    assert!(matches!(
        read_table(&path, "system"),
        Err(InputError::UnsupportedFormat { .. })
    ));
}

#[test]
fn malformed_json_is_unreadable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ not an array").unwrap();
    assert!(matches!(
        read_table(&path, "reference"),
        Err(InputError::Unreadable { .. })
    ));
}

#[test]
fn nested_json_values_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested.json");
    fs::write(&path, r#"[{"student_name": "Ada", "scores": [1, 2]}]"#).unwrap();
    let err = read_table(&path, "reference").unwrap_err();
    assert!(err.to_string().contains("scores"));
}

#[test]
fn ragged_csv_rows_are_padded() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ragged.csv");
    fs::write(&path, "student_name,a,b\nAda,1\n").unwrap();
    let table = read_table(&path, "system").unwrap();
    assert_eq!(table.cell(0, "b"), Some(""));
}
