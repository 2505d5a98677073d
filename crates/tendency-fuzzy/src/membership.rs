use serde::Serialize;
use tendency_core::errors::MembershipError;

/// Trapezoidal membership function `(a, b, c, d)` with `a <= b <= c <= d`.
///
/// ```text
///   1 |      b______c
///     |     /        \
///   0 |____a          d____
/// ```
///
/// `a == b` or `c == d` turn the corresponding ramp into a step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Trapezoid {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
}

impl Trapezoid {
    /// Build a trapezoid, rejecting non-finite or decreasing breakpoints.
    /// `band` names the function in errors.
    pub fn new(band: &str, breakpoints: [f64; 4]) -> Result<Self, MembershipError> {
        if breakpoints.iter().any(|p| !p.is_finite()) {
            return Err(MembershipError::NonFinite {
                band: band.to_string(),
                breakpoints,
            });
        }
        if breakpoints.windows(2).any(|w| w[0] > w[1]) {
            return Err(MembershipError::NonMonotonic {
                band: band.to_string(),
                breakpoints,
            });
        }
        let [a, b, c, d] = breakpoints;
        Ok(Self { a, b, c, d })
    }

    /// Caller guarantees the breakpoints are finite and sorted.
    pub(crate) const fn from_sorted(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    pub fn breakpoints(&self) -> [f64; 4] {
        [self.a, self.b, self.c, self.d]
    }

    /// Degree of membership of `x`, in [0.0, 1.0]. NaN has degree 0.
    pub fn degree(&self, x: f64) -> f64 {
        if x.is_nan() || x < self.a || x > self.d {
            return 0.0;
        }
        if x >= self.b && x <= self.c {
            return 1.0;
        }
        // Here a < x < b or c < x < d, so the divisor is non-zero.
        let degree = if x < self.b {
            (x - self.a) / (self.b - self.a)
        } else {
            (self.d - x) / (self.d - self.c)
        };
        degree.clamp(0.0, 1.0)
    }
}
