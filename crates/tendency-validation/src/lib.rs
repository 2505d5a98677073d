//! # tendency-validation
//!
//! Compares the fuzzy system's tendency against the questionnaire's crisp
//! tendency for every record and dimension, then folds the rows into
//! per-dimension agreement.
//!
//! ## Dimensions
//! 1. **Processing**: Active / Reflective
//! 2. **Perception**: Sensing / Intuitive
//! 3. **Input**: Visual / Verbal
//! 4. **Understanding**: Sequential / Global

pub mod aggregator;
pub mod comparator;
pub mod engine;

pub use aggregator::aggregate;
pub use comparator::{DimensionComparator, DimensionSpec};
pub use engine::{ComparisonEngine, ComparisonOutcome};
