use crate::errors::SchemaError;

/// A joined record that exposes named numeric score fields.
///
/// Implemented by the merged-table rows of `tendency-tables`; the comparator
/// only sees this trait.
pub trait ScoreRecord {
    /// Identity reported in the comparison rows.
    fn identity(&self) -> &str;

    /// Numeric score in `column`.
    ///
    /// Returns `SchemaError::MissingColumn` when the field does not exist and
    /// `SchemaError::InvalidScore` when its cell is not a finite number.
    fn score(&self, column: &str) -> Result<f64, SchemaError>;
}
