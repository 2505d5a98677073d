//! # tendency-tables
//!
//! Table collaborators around the comparison core: reading the system and
//! questionnaire tables, joining them on a normalized name key, and writing
//! the comparison table back out.

pub mod format;
pub mod join;
pub mod reader;
pub mod table;
pub mod writer;

pub use format::TableFormat;
pub use join::{inner_join, normalize_key, JoinSpec, MergedRecord, MergedTable};
pub use reader::read_table;
pub use table::Table;
pub use writer::{round_score, write_comparison};
