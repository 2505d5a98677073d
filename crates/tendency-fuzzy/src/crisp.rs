use tendency_core::config::defaults::DEFAULT_MIDPOINT;
use tendency_core::Pole;

/// Midpoint threshold classifier for the reference instrument.
///
/// `score < midpoint` is pole 1, anything else is pole 2, so the midpoint
/// itself belongs to pole 2. There is no undetermined outcome.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrispPoleClassifier {
    midpoint: f64,
}

impl CrispPoleClassifier {
    pub fn new(midpoint: f64) -> Self {
        Self { midpoint }
    }

    pub fn midpoint(&self) -> f64 {
        self.midpoint
    }

    pub fn classify(&self, score: f64) -> Pole {
        if score < self.midpoint {
            Pole::Pole1
        } else {
            Pole::Pole2
        }
    }
}

impl Default for CrispPoleClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_MIDPOINT)
    }
}
