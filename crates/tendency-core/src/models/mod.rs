//! Data model shared by the classifiers, the comparator, and the table I/O.

pub mod agreement;
pub mod comparison_row;
pub mod dimension;
pub mod tendency;

pub use agreement::{AgreementReport, AgreementStat};
pub use comparison_row::ComparisonRow;
pub use dimension::Dimension;
pub use tendency::{Pole, Tendency};
