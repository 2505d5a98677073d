//! Inner join of the system and reference tables on a normalized name key.

use std::collections::HashMap;
use std::sync::Arc;

use tendency_core::config::InputConfig;
use tendency_core::constants::MERGE_KEY_COLUMN;
use tendency_core::errors::SchemaError;
use tendency_core::tracing_setup::events;
use tendency_core::ScoreRecord;

use crate::table::Table;

/// Standardized merge key: surrounding whitespace trimmed, inner spaces
/// replaced by `_`.
///
/// Trimming comes first, so `" Grace Hopper"` and `"Grace Hopper"` share a
/// key. Replacing first would turn the leading space into `_` and keep the
/// two apart.
pub fn normalize_key(raw: &str) -> String {
    raw.trim().replace(' ', "_")
}

/// Join settings.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinSpec {
    pub key_column: String,
    pub system_suffix: String,
    pub reference_suffix: String,
}

impl JoinSpec {
    /// Suffixed name of the identity column in the merged table.
    pub fn identity_column(&self) -> String {
        format!("{}{}", self.key_column, self.system_suffix)
    }
}

impl From<&InputConfig> for JoinSpec {
    fn from(config: &InputConfig) -> Self {
        Self {
            key_column: config.key_column.clone(),
            system_suffix: config.system_suffix.clone(),
            reference_suffix: config.reference_suffix.clone(),
        }
    }
}

impl Default for JoinSpec {
    fn default() -> Self {
        Self::from(&InputConfig::default())
    }
}

/// Result of the join. Rows share one column index.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedTable {
    columns: Arc<Vec<String>>,
    records: Vec<MergedRecord>,
}

impl MergedTable {
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn records(&self) -> &[MergedRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// One joined (system row, reference row) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedRecord {
    identity: String,
    columns: Arc<Vec<String>>,
    values: Vec<String>,
}

impl MergedRecord {
    /// Raw cell for `column`.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.columns
            .iter()
            .position(|c| c == column)
            .map(|idx| self.values[idx].as_str())
    }

    pub fn merge_key(&self) -> Option<&str> {
        self.get(MERGE_KEY_COLUMN)
    }
}

impl ScoreRecord for MergedRecord {
    fn identity(&self) -> &str {
        &self.identity
    }

    fn score(&self, column: &str) -> Result<f64, SchemaError> {
        let raw = self.get(column).ok_or_else(|| SchemaError::MissingColumn {
            column: column.to_string(),
            table: "the merged table".to_string(),
        })?;
        match raw.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(SchemaError::InvalidScore {
                identity: self.identity.clone(),
                column: column.to_string(),
                value: raw.to_string(),
            }),
        }
    }
}

/// Inner join of `system` and `reference` on the normalized `key_column`.
///
/// Output follows system row order; a key repeated on either side yields
/// every (system, reference) pairing, reference order inside each system
/// row. Columns present in both tables get the configured suffixes. Rows
/// whose key has no partner are dropped.
pub fn inner_join(
    system: &Table,
    reference: &Table,
    spec: &JoinSpec,
) -> Result<MergedTable, SchemaError> {
    system.require_columns(&[spec.key_column.as_str()])?;
    reference.require_columns(&[spec.key_column.as_str()])?;

    let system_keys = keys_of(system, &spec.key_column);
    let reference_keys = keys_of(reference, &spec.key_column);

    // Source columns that take part in the join, minus any stale merge key.
    let system_cols: Vec<usize> = payload_columns(system);
    let reference_cols: Vec<usize> = payload_columns(reference);

    let shared = |name: &str| {
        system.column_index(name).is_some() && reference.column_index(name).is_some()
    };

    let mut columns = Vec::with_capacity(system_cols.len() + reference_cols.len() + 1);
    for &idx in &system_cols {
        let name = &system.headers()[idx];
        columns.push(if shared(name.as_str()) {
            format!("{name}{}", spec.system_suffix)
        } else {
            name.clone()
        });
    }
    columns.push(MERGE_KEY_COLUMN.to_string());
    for &idx in &reference_cols {
        let name = &reference.headers()[idx];
        columns.push(if shared(name.as_str()) {
            format!("{name}{}", spec.reference_suffix)
        } else {
            name.clone()
        });
    }
    let columns = Arc::new(columns);

    let mut by_key: HashMap<&str, Vec<usize>> = HashMap::new();
    for (row, key) in reference_keys.iter().enumerate() {
        by_key.entry(key.as_str()).or_default().push(row);
    }

    let mut records = Vec::new();
    for (s_row, key) in system_keys.iter().enumerate() {
        let Some(partners) = by_key.get(key.as_str()) else {
            continue;
        };
        let s_values = &system.rows()[s_row];
        for &r_row in partners {
            let r_values = &reference.rows()[r_row];
            let mut values = Vec::with_capacity(columns.len());
            values.extend(system_cols.iter().map(|&i| s_values[i].clone()));
            values.push(key.clone());
            values.extend(reference_cols.iter().map(|&i| r_values[i].clone()));
            records.push(MergedRecord {
                identity: system
                    .cell(s_row, &spec.key_column)
                    .unwrap_or_default()
                    .to_string(),
                columns: Arc::clone(&columns),
                values,
            });
        }
    }

    events::join_completed(system.len(), reference.len(), records.len());
    Ok(MergedTable { columns, records })
}

fn keys_of(table: &Table, key_column: &str) -> Vec<String> {
    (0..table.len())
        .map(|row| normalize_key(table.cell(row, key_column).unwrap_or_default()))
        .collect()
}

fn payload_columns(table: &Table) -> Vec<usize> {
    table
        .headers()
        .iter()
        .enumerate()
        .filter(|(_, h)| h.as_str() != MERGE_KEY_COLUMN)
        .map(|(i, _)| i)
        .collect()
}
