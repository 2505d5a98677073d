//! In-memory string table.

use tendency_core::errors::SchemaError;

/// A rectangular table of raw string cells with a header row.
///
/// Cells stay as read; numeric parsing happens when a score is requested.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    source: String,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Build a table. Short rows are padded with empty cells.
    pub fn new(source: impl Into<String>, headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, String::new());
                row
            })
            .collect();
        Self {
            source: source.into(),
            headers,
            rows,
        }
    }

    /// Where the table came from, used in error messages.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == column)
    }

    /// Fail with the first of `columns` that is not in the header row.
    pub fn require_columns<S: AsRef<str>>(&self, columns: &[S]) -> Result<(), SchemaError> {
        for column in columns {
            let column = column.as_ref();
            if self.column_index(column).is_none() {
                return Err(SchemaError::MissingColumn {
                    column: column.to_string(),
                    table: self.source.clone(),
                });
            }
        }
        Ok(())
    }

    /// Cell at `row` in `column`, if both exist.
    pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
        let idx = self.column_index(column)?;
        self.rows.get(row).map(|r| r[idx].as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Table {
        Table::new(
            "people.csv",
            vec!["student_name".into(), "score".into()],
            vec![vec!["Ada".into(), "3".into()], vec!["Alan".into()]],
        )
    }

    #[test]
    fn short_rows_are_padded() {
        let t = table();
        assert_eq!(t.cell(1, "score"), Some(""));
        assert_eq!(t.cell(0, "score"), Some("3"));
        assert_eq!(t.cell(2, "score"), None);
    }

    #[test]
    fn missing_column_names_table_and_column() {
        let err = table().require_columns(&["student_name", "grade"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "The column 'grade' was not found in people.csv."
        );
    }
}
