//! Result table writers.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use tendency_core::errors::OutputError;
use tendency_core::tracing_setup::events;
use tendency_core::ComparisonRow;

use crate::format::TableFormat;

/// Round to `precision` decimals. Exact ties go to the even digit, so
/// 0.125 becomes 0.12 and 0.375 becomes 0.38.
pub fn round_score(value: f64, precision: u32) -> f64 {
    let factor = 10f64.powi(precision as i32);
    (value * factor).round_ties_even() / factor
}

/// One line of the persisted comparison table.
#[derive(Debug, Serialize)]
struct OutputRow<'a> {
    #[serde(rename = "Student_Name")]
    student_name: &'a str,
    #[serde(rename = "Dimension")]
    dimension: &'static str,
    #[serde(rename = "System_Score")]
    system_score: f64,
    #[serde(rename = "Questionnaire_Score")]
    questionnaire_score: f64,
    #[serde(rename = "System_Tendency")]
    system_tendency: &'static str,
    #[serde(rename = "Questionnaire_Tendency")]
    questionnaire_tendency: &'static str,
    #[serde(rename = "Match?")]
    matched: &'static str,
}

impl<'a> OutputRow<'a> {
    fn from_row(row: &'a ComparisonRow, precision: u32) -> Self {
        Self {
            student_name: row.identity(),
            dimension: row.dimension().name(),
            system_score: round_score(row.system_score(), precision),
            questionnaire_score: round_score(row.reference_score(), precision),
            system_tendency: row.system_tendency().label(),
            questionnaire_tendency: row.reference_tendency().label(),
            matched: if row.matched() { "Yes" } else { "No" },
        }
    }
}

/// Write the comparison table to `path`, creating its directory if needed.
/// Returns the number of rows written.
pub fn write_comparison(
    path: &Path,
    rows: &[ComparisonRow],
    precision: u32,
) -> Result<usize, OutputError> {
    let display = path.display().to_string();
    let format = TableFormat::from_path(path).ok_or_else(|| OutputError::UnsupportedFormat {
        path: display.clone(),
    })?;
    let failed = |message: String| OutputError::WriteFailed {
        path: display.clone(),
        message,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| failed(e.to_string()))?;
        }
    }

    let output: Vec<OutputRow<'_>> = rows
        .iter()
        .map(|row| OutputRow::from_row(row, precision))
        .collect();

    let file = File::create(path).map_err(|e| failed(e.to_string()))?;
    match format {
        TableFormat::Csv => {
            let mut writer = csv::Writer::from_writer(BufWriter::new(file));
            if output.is_empty() {
                writer
                    .write_record(HEADERS)
                    .map_err(|e| failed(e.to_string()))?;
            }
            for row in &output {
                writer.serialize(row).map_err(|e| failed(e.to_string()))?;
            }
            writer.flush().map_err(|e| failed(e.to_string()))?;
        }
        TableFormat::Json => {
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, &output)
                .map_err(|e| failed(e.to_string()))?;
            writer.write_all(b"\n").map_err(|e| failed(e.to_string()))?;
            writer.flush().map_err(|e| failed(e.to_string()))?;
        }
    }

    events::output_written(&display, output.len());
    Ok(output.len())
}

const HEADERS: [&str; 7] = [
    "Student_Name",
    "Dimension",
    "System_Score",
    "Questionnaire_Score",
    "System_Tendency",
    "Questionnaire_Tendency",
    "Match?",
];
