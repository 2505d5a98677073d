//! Test fixture loader for the golden input and expected result tables.
//!
//! Fixture files live in the workspace-level `test-fixtures/` directory.

use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Expected per-dimension agreement for the golden tables, in dimension order.
pub const GOLDEN_AGREEMENT: [(&str, usize, usize); 4] = [
    ("Processing", 4, 4),
    ("Perception", 2, 4),
    ("Input", 3, 4),
    ("Understanding", 3, 4),
];

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").join("tables").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// Golden system table.
pub fn system_table() -> PathBuf {
    fixture_path("tables/system_results.csv")
}

/// Golden questionnaire table (CSV).
pub fn questionnaire_table() -> PathBuf {
    fixture_path("tables/questionnaire_results.csv")
}

/// The questionnaire table in JSON form, same content.
pub fn questionnaire_table_json() -> PathBuf {
    fixture_path("tables/questionnaire_results.json")
}

/// Comparison table the golden inputs must produce.
pub fn expected_comparison() -> PathBuf {
    fixture_path("tables/expected_comparison.csv")
}

/// Copy a fixture into `dir`, keeping its file name. Returns the new path.
pub fn copy_fixture_into(relative_path: &str, dir: &Path) -> PathBuf {
    let source = fixture_path(relative_path);
    let name = source
        .file_name()
        .unwrap_or_else(|| panic!("Fixture path has no file name: {}", source.display()));
    let target = dir.join(name);
    std::fs::copy(&source, &target)
        .unwrap_or_else(|e| panic!("Failed to copy fixture {}: {}", source.display(), e));
    target
}
