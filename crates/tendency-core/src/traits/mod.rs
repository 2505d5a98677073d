//! Seams between the comparison core and the table collaborators.

pub mod score_record;

pub use score_record::ScoreRecord;
