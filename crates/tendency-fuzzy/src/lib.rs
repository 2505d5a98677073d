//! # tendency-fuzzy
//!
//! Categorization of learning-style scores.
//!
//! - **Membership model**: four trapezoids (pure/leaning per pole) over a
//!   bounded universe.
//! - **Fuzzy pole classifier**: sums pure + leaning degrees per pole; the
//!   larger total wins, equal totals are `Undetermined`.
//! - **Crisp pole classifier**: fixed midpoint; below is pole 1, the
//!   midpoint and above is pole 2.

pub mod classifier;
pub mod crisp;
pub mod membership;
pub mod model;

pub use classifier::{DominanceBreakdown, FuzzyPoleClassifier};
pub use crisp::CrispPoleClassifier;
pub use membership::Trapezoid;
pub use model::{Band, MembershipModel};
