//! Table readers for the supported on-disk formats.

use std::path::Path;

use serde_json::{Map, Value};
use tendency_core::errors::InputError;
use tendency_core::tracing_setup::events;

use crate::format::TableFormat;
use crate::table::Table;

/// Read the table at `path`, choosing the reader by extension.
///
/// `role` names the table in log events ("system", "reference").
pub fn read_table(path: &Path, role: &str) -> Result<Table, InputError> {
    let display = path.display().to_string();
    let format = TableFormat::from_path(path).ok_or_else(|| InputError::UnsupportedFormat {
        path: display.clone(),
    })?;
    if !path.is_file() {
        return Err(InputError::FileNotFound { path: display });
    }

    let table = match format {
        TableFormat::Csv => read_csv(path, &display)?,
        TableFormat::Json => read_json(path, &display)?,
    };
    events::table_loaded(role, &display, table.len(), table.headers().len());
    Ok(table)
}

fn read_csv(path: &Path, display: &str) -> Result<Table, InputError> {
    let unreadable = |e: csv::Error| InputError::Unreadable {
        path: display.to_string(),
        message: e.to_string(),
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(unreadable)?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(unreadable)?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(unreadable)?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(Table::new(display, headers, rows))
}

/// JSON tables are an array of flat objects. Headers are the union of the
/// object keys: each object's keys come out sorted, and keys first seen in a
/// later object are appended after the earlier ones.
fn read_json(path: &Path, display: &str) -> Result<Table, InputError> {
    let unreadable = |message: String| InputError::Unreadable {
        path: display.to_string(),
        message,
    };

    let content = std::fs::read_to_string(path).map_err(|e| unreadable(e.to_string()))?;
    let objects: Vec<Map<String, Value>> =
        serde_json::from_str(&content).map_err(|e| unreadable(e.to_string()))?;

    let mut headers: Vec<String> = Vec::new();
    for object in &objects {
        for key in object.keys() {
            if !headers.iter().any(|h| h == key) {
                headers.push(key.clone());
            }
        }
    }

    let mut rows = Vec::with_capacity(objects.len());
    for (index, object) in objects.iter().enumerate() {
        let mut row = Vec::with_capacity(headers.len());
        for header in &headers {
            let cell = match object.get(header) {
                None | Some(Value::Null) => String::new(),
                Some(Value::String(s)) => s.clone(),
                Some(Value::Number(n)) => n.to_string(),
                Some(Value::Bool(b)) => b.to_string(),
                Some(_) => {
                    return Err(unreadable(format!(
                        "row {index}: field '{header}' is not a scalar value"
                    )))
                }
            };
            row.push(cell);
        }
        rows.push(row);
    }
    Ok(Table::new(display, headers, rows))
}
